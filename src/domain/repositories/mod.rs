//! Storage capability traits.
//!
//! Each operation handler depends on the narrowest capability it needs
//! (save, get, update or delete), so any of them can be replaced by a
//! `mockall` double in tests without touching handler code.
//!
//! - [`UrlSaver`] - Create a record
//! - [`UrlGetter`] - Resolve an alias
//! - [`UrlUpdater`] - Rename a record and replace its URL
//! - [`UrlDeleter`] - Remove a record
//!
//! [`UrlRepository`] bundles all four and is implemented automatically.

pub mod url_repository;

pub use url_repository::{UrlDeleter, UrlGetter, UrlRepository, UrlSaver, UrlUpdater};

#[cfg(test)]
pub use url_repository::{MockUrlDeleter, MockUrlGetter, MockUrlSaver, MockUrlUpdater};
