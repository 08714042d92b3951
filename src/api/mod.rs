//! HTTP API layer.
//!
//! Translates HTTP requests into storage operations and shapes every
//! non-redirect response into the uniform [`dto::response::Envelope`].
//!
//! # Modules
//!
//! - [`dto`] - Request/response shapes and validation
//! - [`handlers`] - Save, redirect, update and delete handlers
//! - [`middleware`] - Basic auth, request id and tracing middleware
//! - [`routes`] - Route configuration for the protected `/url` group

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
