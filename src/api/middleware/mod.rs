//! HTTP middleware for request processing.
//!
//! Provides session authentication, CORS, and observability middleware.

pub mod auth;
pub mod cors;
pub mod tracing;
