//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Response shapes and query parameters
//! - [`extract`] - Body and query extractors with JSON error rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, CORS and tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
