//! Repository trait for blog posts.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::outcome::{InsertOutcome, UpsertOutcome};
use crate::domain::entities::{Post, PostSearch, Record};
use crate::error::AppError;

/// Repository interface for the posts collection.
///
/// Each method maps to exactly one store operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoPostRepository`] - MongoDB implementation
/// - [`crate::infrastructure::persistence::MemoryPostRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns every post.
    async fn list(&self) -> Result<Vec<Record<Post>>, AppError>;

    /// Finds a post by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(post))` if found
    /// - `Ok(None)` if no post has this id
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Record<Post>>, AppError>;

    /// Inserts a new post; the store generates the id.
    async fn insert(&self, post: Post) -> Result<InsertOutcome, AppError>;

    /// Sets every field present in `post` on the document with `id`,
    /// creating the document under that id if it does not exist.
    ///
    /// Fields absent from `post` keep their stored values.
    async fn upsert(&self, id: ObjectId, post: Post) -> Result<UpsertOutcome, AppError>;

    /// Returns posts whose title matches `search.search` case-insensitively
    /// and, when given, whose category equals `search.category`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if the search term is not a valid
    /// regular expression.
    async fn search(&self, search: &PostSearch) -> Result<Vec<Record<Post>>, AppError>;

    /// Returns posts whose `owner.email` equals `email`.
    async fn find_by_owner(&self, email: &str) -> Result<Vec<Record<Post>>, AppError>;
}
