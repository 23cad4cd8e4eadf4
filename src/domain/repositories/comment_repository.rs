//! Repository trait for comments.

use async_trait::async_trait;

use super::outcome::InsertOutcome;
use crate::domain::entities::Comment;
use crate::error::AppError;

/// Repository interface for the comments collection. Comments are write-only
/// through the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: Comment) -> Result<InsertOutcome, AppError>;
}
