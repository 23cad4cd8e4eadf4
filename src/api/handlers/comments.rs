//! Handler for comment endpoint.

use axum::{Json, extract::State};

use crate::api::dto::ack::InsertAck;
use crate::api::extract::JsonBody;
use crate::domain::entities::Comment;
use crate::error::AppError;
use crate::state::AppState;

/// Stores the request body as a new comment.
///
/// # Endpoint
///
/// `POST /comments`
pub async fn create_comment_handler(
    State(state): State<AppState>,
    JsonBody(comment): JsonBody<Comment>,
) -> Result<Json<InsertAck>, AppError> {
    let outcome = state.comment_service.create(comment).await?;
    Ok(Json(outcome.into()))
}
