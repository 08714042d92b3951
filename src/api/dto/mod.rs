//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde for JSON and `validator` for field validation. Validation
//! failures are rendered by [`validation::validation_error`].

pub mod response;
pub mod save;
pub mod update;
pub mod validation;
