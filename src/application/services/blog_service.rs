//! Blog post service.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::application::services::auth_service::TokenClaims;
use crate::domain::entities::{Post, PostSearch, Record};
use crate::domain::repositories::{InsertOutcome, PostRepository, UpsertOutcome};
use crate::error::AppError;

/// Service for reading and writing blog posts.
///
/// Each operation is a single repository call. The only rule enforced here
/// is ownership on [`BlogService::list_owned`].
pub struct BlogService<R: PostRepository + ?Sized = dyn PostRepository> {
    repository: Arc<R>,
}

impl<R: PostRepository + ?Sized> BlogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Record<Post>>, AppError> {
        self.repository.list().await
    }

    /// Returns the post with `id`, or `None` if it does not exist.
    pub async fn get(&self, id: ObjectId) -> Result<Option<Record<Post>>, AppError> {
        self.repository.find_by_id(id).await
    }

    pub async fn create(&self, post: Post) -> Result<InsertOutcome, AppError> {
        let outcome = self.repository.insert(post).await?;
        tracing::info!(id = %outcome.inserted_id, "Post created");
        Ok(outcome)
    }

    /// Sets the submitted fields on post `id`, creating it under that id if
    /// it does not exist.
    pub async fn update(&self, id: ObjectId, post: Post) -> Result<UpsertOutcome, AppError> {
        let outcome = self.repository.upsert(id, post).await?;
        if outcome.upserted_id.is_some() {
            tracing::info!(%id, "Post created by upsert");
        }
        Ok(outcome)
    }

    pub async fn search(&self, search: &PostSearch) -> Result<Vec<Record<Post>>, AppError> {
        self.repository.search(search).await
    }

    /// Lists posts owned by `email` on behalf of the token holder.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the token was not issued for
    /// `email`. The store is not queried in that case.
    pub async fn list_owned(
        &self,
        claims: &TokenClaims,
        email: &str,
    ) -> Result<Vec<Record<Post>>, AppError> {
        if !claims.is_for(email) {
            tracing::warn!(
                token_email = claims.email().unwrap_or(""),
                requested = email,
                "Ownership check failed"
            );
            return Err(AppError::forbidden("forbidden token", json!({})));
        }

        self.repository.find_by_owner(email).await
    }
}
