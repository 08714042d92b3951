mod common;

use shortlink::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver, UrlUpdater};
use shortlink::error::StorageError;
use shortlink::infrastructure::persistence::SqliteUrlRepository;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_save_then_get(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    let id = repo.save_url("https://api.kanye.rest", "kanye").await.unwrap();
    assert!(id > 0);

    let url = repo.get_url("kanye").await.unwrap();
    assert_eq!(url, "https://api.kanye.rest");
}

#[sqlx::test]
async fn test_save_assigns_distinct_ids(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    let first = repo.save_url("https://a.example.com", "a").await.unwrap();
    let second = repo.save_url("https://b.example.com", "b").await.unwrap();

    assert_ne!(first, second);
}

#[sqlx::test]
async fn test_save_duplicate_alias(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool.clone());
    repo.save_url("https://mail.google.com/", "mail").await.unwrap();

    let result = repo.save_url("https://other.example.com/", "mail").await;

    assert!(matches!(result, Err(StorageError::AlreadyExists)));
    assert_eq!(repo.get_url("mail").await.unwrap(), "https://mail.google.com/");
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_get_not_found(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    let result = repo.get_url("absent").await;

    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[sqlx::test]
async fn test_update_renames_and_replaces_url(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);
    repo.save_url("https://mail.google.com/", "mail").await.unwrap();

    repo.update_url("https://mail.yandex.ru/", "mail", "moil")
        .await
        .unwrap();

    assert_eq!(repo.get_url("moil").await.unwrap(), "https://mail.yandex.ru/");
    assert!(matches!(
        repo.get_url("mail").await,
        Err(StorageError::NotFound)
    ));
}

#[sqlx::test]
async fn test_update_keeps_id(pool: SqlitePool) {
    let id = common::insert_url(&pool, "mail", "https://mail.google.com/").await;
    let repo = SqliteUrlRepository::new(pool.clone());

    repo.update_url("https://mail.google.com/u/0", "mail", "moil")
        .await
        .unwrap();

    let stored_id: i64 = sqlx::query_scalar("SELECT id FROM url WHERE alias = ?")
        .bind("moil")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored_id, id);
}

#[sqlx::test]
async fn test_update_same_alias_changes_url(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);
    repo.save_url("https://mail.google.com/", "mail").await.unwrap();

    repo.update_url("https://gmail.com/", "mail", "mail")
        .await
        .unwrap();

    assert_eq!(repo.get_url("mail").await.unwrap(), "https://gmail.com/");
}

#[sqlx::test]
async fn test_update_not_found(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    let result = repo
        .update_url("https://mail.google.com/", "absent", "moil")
        .await;

    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[sqlx::test]
async fn test_update_to_taken_alias(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);
    repo.save_url("https://mail.google.com/", "mail").await.unwrap();
    repo.save_url("https://api.kanye.rest", "kanye").await.unwrap();

    let result = repo
        .update_url("https://mail.google.com/", "mail", "kanye")
        .await;

    assert!(matches!(result, Err(StorageError::AlreadyExists)));
    assert_eq!(repo.get_url("mail").await.unwrap(), "https://mail.google.com/");
    assert_eq!(repo.get_url("kanye").await.unwrap(), "https://api.kanye.rest");
}

#[sqlx::test]
async fn test_delete_then_get(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);
    repo.save_url("https://api.kanye.rest", "kanye").await.unwrap();

    repo.delete_url("kanye").await.unwrap();

    assert!(matches!(
        repo.get_url("kanye").await,
        Err(StorageError::NotFound)
    ));
}

#[sqlx::test]
async fn test_delete_twice(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);
    repo.save_url("https://api.kanye.rest", "kanye").await.unwrap();

    assert!(repo.delete_url("kanye").await.is_ok());
    assert!(matches!(
        repo.delete_url("kanye").await,
        Err(StorageError::NotFound)
    ));
}

#[sqlx::test]
async fn test_delete_not_found(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    let result = repo.delete_url("absent").await;

    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[sqlx::test]
async fn test_alias_is_reusable_after_delete(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);
    repo.save_url("https://api.kanye.rest", "kanye").await.unwrap();
    repo.delete_url("kanye").await.unwrap();

    repo.save_url("https://kanye.example.com", "kanye")
        .await
        .unwrap();

    assert_eq!(
        repo.get_url("kanye").await.unwrap(),
        "https://kanye.example.com"
    );
}

#[sqlx::test]
async fn test_concurrent_saves_on_same_alias(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool.clone());

    let (first, second) = tokio::join!(
        repo.save_url("https://one.example.com", "race"),
        repo.save_url("https://two.example.com", "race"),
    );

    let outcomes = [first, second];
    let succeeded = outcomes.iter().filter(|r| r.is_ok()).count();
    let conflicted = outcomes
        .iter()
        .filter(|r| matches!(r, Err(StorageError::AlreadyExists)))
        .count();

    assert_eq!(succeeded, 1);
    assert_eq!(conflicted, 1);
    assert_eq!(common::count_urls(&pool).await, 1);
}
