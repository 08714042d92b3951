//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}` - Redirect to the stored URL (public)
//! - `/url/*`        - Alias management (HTTP Basic auth required)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - A panicking handler yields `500` instead of a dropped connection
//! - **Timeout** - Requests exceeding the configured timeout get `408`
//! - **Authentication** - HTTP Basic on the `/url` group
//! - **Path normalization** - Trailing slashes are trimmed, so `POST /url/` is `POST /url`

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{basic_auth, request_id, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use std::time::Duration;
use tower::{Layer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// Normalization wraps the whole router because it has to rewrite the path
/// before routing happens.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let url_router = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.credentials.clone(),
        basic_auth::layer,
    ));

    let router = Router::new()
        .route("/{alias}", get(redirect_handler))
        .nest("/url", url_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id::set_layer())
                .layer(request_id::propagate_layer())
                .layer(tracing::layer())
                .layer(CatchPanicLayer::new())
                .layer(TimeoutLayer::new(request_timeout)),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
