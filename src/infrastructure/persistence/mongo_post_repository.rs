//! MongoDB implementation of the post repository.

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::{Document, doc, oid::ObjectId};

use super::mongo_store::{
    MongoStore, POSTS_COLLECTION, collect, inserted_object_id, to_set_document,
};
use crate::domain::entities::{Post, PostSearch, Record};
use crate::domain::repositories::{InsertOutcome, PostRepository, UpsertOutcome};
use crate::error::AppError;

/// Posts stored in the `Blogs` collection.
pub struct MongoPostRepository {
    collection: Collection<Record<Post>>,
}

impl MongoPostRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(POSTS_COLLECTION),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn list(&self) -> Result<Vec<Record<Post>>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        collect(cursor).await
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Record<Post>>, AppError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, post: Post) -> Result<InsertOutcome, AppError> {
        let result = self.collection.insert_one(Record::new(post)).await?;

        Ok(InsertOutcome {
            inserted_id: inserted_object_id(&result.inserted_id)?,
        })
    }

    async fn upsert(&self, id: ObjectId, post: Post) -> Result<UpsertOutcome, AppError> {
        let update = upsert_update(post)?;

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .upsert(true)
            .await?;

        Ok(UpsertOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().and_then(|b| b.as_object_id()),
        })
    }

    async fn search(&self, search: &PostSearch) -> Result<Vec<Record<Post>>, AppError> {
        let cursor = self.collection.find(search_filter(search)).await?;
        collect(cursor).await
    }

    async fn find_by_owner(&self, email: &str) -> Result<Vec<Record<Post>>, AppError> {
        let cursor = self.collection.find(owner_filter(email)).await?;
        collect(cursor).await
    }
}

/// Case-insensitive title regex, plus an exact category match when one is set.
pub(crate) fn search_filter(search: &PostSearch) -> Document {
    let mut filter = doc! {
        "title": { "$regex": search.search.as_str(), "$options": "i" },
    };
    if let Some(category) = &search.category {
        filter.insert("category", category.as_str());
    }
    filter
}

pub(crate) fn owner_filter(email: &str) -> Document {
    doc! { "owner.email": email }
}

/// `$set` of every submitted top-level field. A client `_id` is dropped so
/// the path id stays authoritative.
pub(crate) fn upsert_update(post: Post) -> Result<Document, AppError> {
    let fields = Record::new(post).fields;
    Ok(doc! { "$set": to_set_document(&fields)? })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;
    use serde_json::json;

    #[test]
    fn test_search_filter_without_terms_matches_every_title() {
        let filter = search_filter(&PostSearch::new(None, None));

        assert_eq!(
            filter,
            doc! { "title": { "$regex": "", "$options": "i" } }
        );
    }

    #[test]
    fn test_search_filter_ignores_empty_category() {
        let filter = search_filter(&PostSearch::new(Some("rust".into()), Some(String::new())));

        assert_eq!(
            filter,
            doc! { "title": { "$regex": "rust", "$options": "i" } }
        );
    }

    #[test]
    fn test_search_filter_adds_exact_category() {
        let filter = search_filter(&PostSearch::new(Some("^Hel".into()), Some("tech".into())));

        assert_eq!(
            filter,
            doc! {
                "title": { "$regex": "^Hel", "$options": "i" },
                "category": "tech",
            }
        );
    }

    #[test]
    fn test_owner_filter_uses_nested_email() {
        assert_eq!(owner_filter("a@x.com"), doc! { "owner.email": "a@x.com" });
    }

    #[test]
    fn test_upsert_update_sets_submitted_fields() {
        let post: Post = serde_json::from_value(json!({
            "_id": "ignored",
            "title": "T",
            "category": null,
            "owner": { "email": "a@x.com" }
        }))
        .unwrap();

        let update = upsert_update(post).unwrap();

        assert_eq!(
            update,
            doc! {
                "$set": {
                    "title": "T",
                    "category": Bson::Null,
                    "owner": { "email": "a@x.com" },
                }
            }
        );
    }
}
