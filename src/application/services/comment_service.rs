//! Comment service.

use std::sync::Arc;

use crate::domain::entities::Comment;
use crate::domain::repositories::{CommentRepository, InsertOutcome};
use crate::error::AppError;

pub struct CommentService<R: CommentRepository + ?Sized = dyn CommentRepository> {
    repository: Arc<R>,
}

impl<R: CommentRepository + ?Sized> CommentService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, comment: Comment) -> Result<InsertOutcome, AppError> {
        self.repository.insert(comment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCommentRepository;
    use mongodb::bson::oid::ObjectId;

    #[tokio::test]
    async fn test_create_returns_generated_id() {
        let id = ObjectId::new();
        let mut mock_repo = MockCommentRepository::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(move |_| Ok(InsertOutcome { inserted_id: id }));

        let service = CommentService::new(Arc::new(mock_repo));

        let outcome = service.create(Comment::default()).await.unwrap();

        assert_eq!(outcome.inserted_id, id);
    }
}
