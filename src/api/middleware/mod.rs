//! HTTP middleware for request processing and protection.
//!
//! Provides basic authentication, request ids and request tracing.

pub mod basic_auth;
pub mod request_id;
pub mod tracing;
