//! SQLite repository implementation.
//!
//! Uses SQLx with bound parameters; the schema is embedded from `migrations/`
//! and applied when the repository connects.

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
