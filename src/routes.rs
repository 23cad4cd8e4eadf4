//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`              - Liveness text (public)
//! - `GET /health`        - Store health check (public)
//! - public API routes    - see [`crate::api::routes::public_routes`]
//! - `GET /blog/{email}`  - Session cookie required
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Credentialed requests from configured front-end origins
//! - **Authentication** - Session cookie on protected routes
//!
//! Trailing-slash normalization wraps the router in [`crate::server::run`].

use crate::api;
use crate::api::handlers::{health_handler, root_handler};
use crate::api::middleware::{auth, cors, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - origins allowed to make credentialed requests
pub fn app_router(state: AppState, cors_origins: &[String]) -> Router {
    let protected = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer())
}
