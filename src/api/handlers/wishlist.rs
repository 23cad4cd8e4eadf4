//! Handlers for wishlist endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::ack::{DeleteAck, InsertAck};
use crate::api::dto::document::{DocumentResponse, documents};
use crate::api::extract::JsonBody;
use crate::domain::entities::WishlistEntry;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::object_id::parse_object_id;

/// `GET /wishlist-blog`
pub async fn list_wishlist_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentResponse<WishlistEntry>>>, AppError> {
    let entries = state.wishlist_service.list().await?;
    Ok(Json(documents(entries)))
}

/// Lists entries saved by one user.
///
/// # Endpoint
///
/// `GET /wishlist-blog/{email}`
pub async fn user_wishlist_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<DocumentResponse<WishlistEntry>>>, AppError> {
    let entries = state.wishlist_service.list_for_user(&email).await?;
    Ok(Json(documents(entries)))
}

/// Saves a post to a user's wishlist. Saving the same post twice creates two
/// entries.
///
/// # Endpoint
///
/// `POST /wishlist-blog`
pub async fn create_wishlist_handler(
    State(state): State<AppState>,
    JsonBody(entry): JsonBody<WishlistEntry>,
) -> Result<Json<InsertAck>, AppError> {
    let outcome = state.wishlist_service.save(entry).await?;
    Ok(Json(outcome.into()))
}

/// Removes a wishlist entry.
///
/// # Endpoint
///
/// `DELETE /wishlist-blog/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a valid identifier. Deleting a
/// missing entry succeeds with `deletedCount: 0`.
pub async fn delete_wishlist_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, AppError> {
    let id = parse_object_id(&id)?;
    let outcome = state.wishlist_service.remove(id).await?;
    Ok(Json(outcome.into()))
}
