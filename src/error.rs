//! Domain error vocabulary shared by storage and handlers.

use std::fmt::Display;

/// Errors returned by the URL storage capabilities.
///
/// Handlers never see persistence-specific error types: the storage
/// implementation classifies every failure into one of these variants.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No record is stored under the requested alias.
    #[error("url not found")]
    NotFound,

    /// The alias is already taken by another record.
    #[error("url already exists")]
    AlreadyExists,

    /// Any other persistence or I/O failure.
    ///
    /// `op` names the failing storage operation, e.g. `storage.sqlite.save_url`.
    #[error("{op}: {message}")]
    Internal { op: &'static str, message: String },
}

impl StorageError {
    pub fn internal(op: &'static str, err: impl Display) -> Self {
        Self::Internal {
            op,
            message: err.to_string(),
        }
    }
}
