//! In-process document store.
//!
//! Backs the API when `STORAGE_BACKEND=memory` (local development without a
//! database) and the HTTP integration tests. Semantics follow the MongoDB
//! repositories: generated `ObjectId`s, `$set`-style upserts, case-insensitive
//! regex title search.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use regex::RegexBuilder;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{
    Comment, DocumentFields, Post, PostSearch, Record, WishlistEntry,
};
use crate::domain::repositories::{
    CommentRepository, DeleteOutcome, HealthRepository, InsertOutcome, PostRepository,
    UpsertOutcome, WishlistRepository,
};
use crate::error::AppError;

/// One collection of records guarded by a read-write lock.
struct MemoryCollection<T> {
    records: RwLock<Vec<Record<T>>>,
}

impl<T: DocumentFields> MemoryCollection<T> {
    fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    async fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<Record<T>> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| predicate(&r.fields))
            .cloned()
            .collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> Option<Record<T>> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
    }

    async fn insert(&self, fields: T) -> InsertOutcome {
        let mut record = Record::new(fields);
        let id = ObjectId::new();
        record.id = Some(id);
        self.records.write().await.push(record);
        InsertOutcome { inserted_id: id }
    }

    async fn upsert(&self, id: ObjectId, fields: T) -> UpsertOutcome {
        let mut patch = Record::new(fields).fields;
        let mut records = self.records.write().await;

        match records.iter_mut().find(|r| r.id == Some(id)) {
            Some(existing) => {
                let before = existing.fields.extra().clone();
                existing
                    .fields
                    .extra_mut()
                    .extend(std::mem::take(patch.extra_mut()));
                UpsertOutcome {
                    matched_count: 1,
                    modified_count: u64::from(*existing.fields.extra() != before),
                    upserted_id: None,
                }
            }
            None => {
                records.push(Record::with_id(id, patch));
                UpsertOutcome {
                    matched_count: 0,
                    modified_count: 0,
                    upserted_id: Some(id),
                }
            }
        }
    }

    async fn delete(&self, id: ObjectId) -> DeleteOutcome {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id == Some(id)) {
            Some(index) => {
                records.remove(index);
                DeleteOutcome { deleted_count: 1 }
            }
            None => DeleteOutcome { deleted_count: 0 },
        }
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

/// In-memory posts collection.
pub struct MemoryPostRepository {
    posts: MemoryCollection<Post>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: MemoryCollection::new(),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.len().await
    }
}

impl Default for MemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn list(&self) -> Result<Vec<Record<Post>>, AppError> {
        Ok(self.posts.filter(|_| true).await)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Record<Post>>, AppError> {
        Ok(self.posts.find_by_id(id).await)
    }

    async fn insert(&self, post: Post) -> Result<InsertOutcome, AppError> {
        Ok(self.posts.insert(post).await)
    }

    async fn upsert(&self, id: ObjectId, post: Post) -> Result<UpsertOutcome, AppError> {
        Ok(self.posts.upsert(id, post).await)
    }

    async fn search(&self, search: &PostSearch) -> Result<Vec<Record<Post>>, AppError> {
        let pattern = RegexBuilder::new(&search.search)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                AppError::invalid_argument(
                    "Invalid search expression",
                    json!({ "search": search.search, "reason": e.to_string() }),
                )
            })?;

        Ok(self
            .posts
            .filter(|post| {
                let title_matches = post.title().is_some_and(|t| pattern.is_match(t));
                let category_matches = match &search.category {
                    Some(category) => post.category() == Some(category.as_str()),
                    None => true,
                };
                title_matches && category_matches
            })
            .await)
    }

    async fn find_by_owner(&self, email: &str) -> Result<Vec<Record<Post>>, AppError> {
        Ok(self.posts.filter(|post| post.is_owned_by(email)).await)
    }
}

/// In-memory wishlist collection.
pub struct MemoryWishlistRepository {
    entries: MemoryCollection<WishlistEntry>,
}

impl MemoryWishlistRepository {
    pub fn new() -> Self {
        Self {
            entries: MemoryCollection::new(),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.len().await
    }
}

impl Default for MemoryWishlistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WishlistRepository for MemoryWishlistRepository {
    async fn list(&self) -> Result<Vec<Record<WishlistEntry>>, AppError> {
        Ok(self.entries.filter(|_| true).await)
    }

    async fn find_by_user(&self, email: &str) -> Result<Vec<Record<WishlistEntry>>, AppError> {
        Ok(self.entries.filter(|entry| entry.belongs_to(email)).await)
    }

    async fn insert(&self, entry: WishlistEntry) -> Result<InsertOutcome, AppError> {
        Ok(self.entries.insert(entry).await)
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteOutcome, AppError> {
        Ok(self.entries.delete(id).await)
    }
}

/// In-memory comments collection.
pub struct MemoryCommentRepository {
    comments: MemoryCollection<Comment>,
}

impl MemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: MemoryCollection::new(),
        }
    }

    pub async fn len(&self) -> usize {
        self.comments.len().await
    }
}

impl Default for MemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn insert(&self, comment: Comment) -> Result<InsertOutcome, AppError> {
        Ok(self.comments.insert(comment).await)
    }
}

/// Liveness check for the in-memory backend; always healthy.
pub struct MemoryHealthRepository;

#[async_trait]
impl HealthRepository for MemoryHealthRepository {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
