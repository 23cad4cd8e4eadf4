//! Repository trait definitions for the domain layer.
//!
//! These traits abstract document-store access. Concrete implementations live
//! in `crate::infrastructure::persistence` (MongoDB and in-memory).
//!
//! # Available Repositories
//!
//! - [`PostRepository`] - Blog posts
//! - [`WishlistRepository`] - Saved posts per user
//! - [`CommentRepository`] - Comments
//! - [`HealthRepository`] - Store liveness
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod comment_repository;
pub mod health_repository;
pub mod outcome;
pub mod post_repository;
pub mod wishlist_repository;

pub use comment_repository::CommentRepository;
pub use health_repository::HealthRepository;
pub use outcome::{DeleteOutcome, InsertOutcome, UpsertOutcome};
pub use post_repository::PostRepository;
pub use wishlist_repository::WishlistRepository;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use wishlist_repository::MockWishlistRepository;
