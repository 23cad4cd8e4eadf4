//! Application layer services.
//!
//! Services sit between HTTP handlers and repository traits. Resource services
//! forward to one repository call each; the auth service owns token signing
//! and the session cookie.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Session token issue/verify
//! - [`services::blog_service::BlogService`] - Posts, including the ownership check
//! - [`services::wishlist_service::WishlistService`] - Saved posts per user
//! - [`services::comment_service::CommentService`] - Comments

pub mod services;
