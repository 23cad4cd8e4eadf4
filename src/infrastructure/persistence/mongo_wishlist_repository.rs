//! MongoDB implementation of the wishlist repository.

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::{Document, doc, oid::ObjectId};

use super::mongo_store::{MongoStore, WISHLIST_COLLECTION, collect, inserted_object_id};
use crate::domain::entities::{Record, WishlistEntry};
use crate::domain::repositories::{DeleteOutcome, InsertOutcome, WishlistRepository};
use crate::error::AppError;

pub struct MongoWishlistRepository {
    collection: Collection<Record<WishlistEntry>>,
}

impl MongoWishlistRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(WISHLIST_COLLECTION),
        }
    }
}

#[async_trait]
impl WishlistRepository for MongoWishlistRepository {
    async fn list(&self) -> Result<Vec<Record<WishlistEntry>>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        collect(cursor).await
    }

    async fn find_by_user(&self, email: &str) -> Result<Vec<Record<WishlistEntry>>, AppError> {
        let cursor = self.collection.find(user_filter(email)).await?;
        collect(cursor).await
    }

    async fn insert(&self, entry: WishlistEntry) -> Result<InsertOutcome, AppError> {
        let result = self.collection.insert_one(Record::new(entry)).await?;

        Ok(InsertOutcome {
            inserted_id: inserted_object_id(&result.inserted_id)?,
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}

pub(crate) fn user_filter(email: &str) -> Document {
    doc! { "user.email": email }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_filter_uses_nested_email() {
        assert_eq!(user_filter("a@x.com"), doc! { "user.email": "a@x.com" });
    }
}
