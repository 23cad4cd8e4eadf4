//! Repository trait for wishlist entries.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::outcome::{DeleteOutcome, InsertOutcome};
use crate::domain::entities::{Record, WishlistEntry};
use crate::error::AppError;

/// Repository interface for the wishlist collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Returns every wishlist entry.
    async fn list(&self) -> Result<Vec<Record<WishlistEntry>>, AppError>;

    /// Returns entries whose `user.email` equals `email`.
    async fn find_by_user(&self, email: &str) -> Result<Vec<Record<WishlistEntry>>, AppError>;

    /// Inserts a new entry. Duplicates are not rejected.
    async fn insert(&self, entry: WishlistEntry) -> Result<InsertOutcome, AppError>;

    /// Deletes the entry with `id`; deleting a missing id is not an error.
    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, AppError>;
}
