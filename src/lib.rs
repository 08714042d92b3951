//! # shortlink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Storage capability traits
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite implementation
//! - **API Layer** ([`api`]) - Handlers, DTOs, validation and middleware
//!
//! ## Endpoints
//!
//! - `POST /url` - save a URL under an alias (basic auth)
//! - `PUT /url` - rename an alias and replace its URL (basic auth)
//! - `DELETE /url/{alias}` - delete an alias (basic auth)
//! - `GET /{alias}` - redirect to the stored URL
//!
//! Every `/url` response is `200 OK` with a `{status, error, ...}` envelope;
//! callers inspect the body, not the status code.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::StorageError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::response::{Envelope, Status};
    pub use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver, UrlUpdater};
    pub use crate::error::StorageError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
