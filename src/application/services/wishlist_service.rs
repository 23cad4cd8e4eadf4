//! Wishlist service.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::entities::{Record, WishlistEntry};
use crate::domain::repositories::{DeleteOutcome, InsertOutcome, WishlistRepository};
use crate::error::AppError;

/// Service for saving, listing and removing wishlist entries.
pub struct WishlistService<R: WishlistRepository + ?Sized = dyn WishlistRepository> {
    repository: Arc<R>,
}

impl<R: WishlistRepository + ?Sized> WishlistService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Record<WishlistEntry>>, AppError> {
        self.repository.list().await
    }

    /// Entries saved by the user with `email`.
    pub async fn list_for_user(&self, email: &str) -> Result<Vec<Record<WishlistEntry>>, AppError> {
        self.repository.find_by_user(email).await
    }

    pub async fn save(&self, entry: WishlistEntry) -> Result<InsertOutcome, AppError> {
        tracing::debug!(?entry, "Saving wishlist entry");
        self.repository.insert(entry).await
    }

    /// Removes entry `id`. A missing entry yields `deleted_count == 0`.
    pub async fn remove(&self, id: ObjectId) -> Result<DeleteOutcome, AppError> {
        self.repository.delete(id).await
    }
}
