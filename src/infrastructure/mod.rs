//! Infrastructure layer for external integrations.
//!
//! Implements the storage capabilities defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementation

pub mod persistence;
