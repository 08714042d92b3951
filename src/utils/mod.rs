//! Utility functions shared by the HTTP handlers and the admin CLI.
//!
//! - [`alias_generator`] - Random alias generation

pub mod alias_generator;
