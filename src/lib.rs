//! # Blog API
//!
//! Backend for a blogging platform: posts, comments and per-user wishlists
//! stored as schema-less documents in MongoDB, with cookie-based sessions.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Document entities and repository traits
//! - **Application Layer** ([`application`]) - Services, including token issuing
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Post CRUD, upsert and case-insensitive title search
//! - Wishlist listing, saving and removal per user
//! - HS256 session tokens delivered as an `HttpOnly` cookie
//! - Owner-only listing behind the session cookie
//!
//! ## Quick Start
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export ACCESS_TOKEN_SECRET="change-me"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthService, BlogService, CommentService, CookiePolicy, TokenClaims, WishlistService,
    };
    pub use crate::domain::entities::{Comment, Post, Record, WishlistEntry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::Repositories;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
