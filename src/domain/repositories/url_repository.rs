//! Capability traits for URL record storage.

use crate::error::StorageError;
use async_trait::async_trait;

/// Something that can persist a new alias → URL mapping.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Inserts a new record and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] if `alias` is already in use.
    /// Returns [`StorageError::Internal`] on any other storage failure.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError>;
}

/// Something that can look up a URL by alias.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record has that alias.
    /// Returns [`StorageError::Internal`] on any other storage failure.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Something that can rewrite an existing record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlUpdater: Send + Sync {
    /// Replaces both the alias and the URL of the record addressed by `old_alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if `old_alias` addresses no record.
    /// Returns [`StorageError::AlreadyExists`] if `new_alias` belongs to another record.
    /// Returns [`StorageError::Internal`] on any other storage failure.
    async fn update_url(
        &self,
        url: &str,
        old_alias: &str,
        new_alias: &str,
    ) -> Result<(), StorageError>;
}

/// Something that can remove a record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Deletes the record addressed by `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no row was affected.
    /// Returns [`StorageError::Internal`] on any other storage failure.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}

/// Full CRUD over URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
pub trait UrlRepository: UrlSaver + UrlGetter + UrlUpdater + UrlDeleter {}

impl<T> UrlRepository for T where T: UrlSaver + UrlGetter + UrlUpdater + UrlDeleter {}
