//! Domain layer: the capabilities the service needs from storage.
//!
//! The domain layer has no dependency on SQLite or HTTP. Handlers consume the
//! traits in [`repositories`]; [`crate::infrastructure::persistence`] provides
//! the concrete implementation.

pub mod repositories;
