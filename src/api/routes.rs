//! API route configuration.
//!
//! All routes here require HTTP Basic authentication via
//! [`crate::api::middleware::basic_auth`].

use crate::api::handlers::{delete_handler, save_handler, update_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Alias management routes, nested under `/url`.
///
/// # Endpoints
///
/// - `POST   /`         - Save a URL under an alias
/// - `PUT    /`         - Rename an alias and replace its URL
/// - `DELETE /{alias}`  - Delete an alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(save_handler).put(update_handler))
        .route("/{alias}", delete(delete_handler))
}
