#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use shortlink::api::middleware::basic_auth::BasicCredentials;
use shortlink::infrastructure::persistence::SqliteUrlRepository;
use shortlink::routes::app_router;
use shortlink::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// `Authorization` header value for `admin:secret`.
pub const AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

/// `Authorization` header value for `admin:wrong`.
pub const WRONG_AUTH_HEADER: &str = "Basic YWRtaW46d3Jvbmc=";

pub async fn insert_url(pool: &SqlitePool, alias: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
        .bind(url)
        .bind(alias)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(pool));
    AppState::new(repository, BasicCredentials::new("admin", "secret"))
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = app_router(create_test_state(pool), Duration::from_secs(4));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}
