//! MongoDB implementation of the comment repository.

use async_trait::async_trait;
use mongodb::Collection;

use super::mongo_store::{COMMENTS_COLLECTION, MongoStore, inserted_object_id};
use crate::domain::entities::{Comment, Record};
use crate::domain::repositories::{CommentRepository, InsertOutcome};
use crate::error::AppError;

pub struct MongoCommentRepository {
    collection: Collection<Record<Comment>>,
}

impl MongoCommentRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(COMMENTS_COLLECTION),
        }
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn insert(&self, comment: Comment) -> Result<InsertOutcome, AppError> {
        let result = self.collection.insert_one(Record::new(comment)).await?;

        Ok(InsertOutcome {
            inserted_id: inserted_object_id(&result.inserted_id)?,
        })
    }
}
