//! Handlers for blog post endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::ack::{InsertAck, UpdateAck};
use crate::api::dto::document::{DocumentResponse, documents};
use crate::api::dto::search::SearchQuery;
use crate::api::extract::{JsonBody, QueryParams};
use crate::application::services::TokenClaims;
use crate::domain::entities::Post;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::object_id::parse_object_id;

/// Lists every post.
///
/// # Endpoint
///
/// `GET /blogs`
pub async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentResponse<Post>>>, AppError> {
    let posts = state.blog_service.list().await?;
    Ok(Json(documents(posts)))
}

/// Returns one post, or `null` if no post has this id.
///
/// # Endpoint
///
/// `GET /blogs/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a valid identifier.
pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<DocumentResponse<Post>>>, AppError> {
    let id = parse_object_id(&id)?;
    let post = state.blog_service.get(id).await?;
    Ok(Json(post.map(DocumentResponse::from)))
}

/// Stores the request body as a new post.
///
/// # Endpoint
///
/// `POST /blogs`
///
/// # Response
///
/// ```json
/// { "acknowledged": true, "insertedId": "65f0c0ffee65f0c0ffee65f0" }
/// ```
pub async fn create_post_handler(
    State(state): State<AppState>,
    JsonBody(post): JsonBody<Post>,
) -> Result<Json<InsertAck>, AppError> {
    let outcome = state.blog_service.create(post).await?;
    Ok(Json(outcome.into()))
}

/// Sets the submitted fields on a post, creating it under `id` if missing.
///
/// # Endpoint
///
/// `PUT /blogs/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a valid identifier.
pub async fn update_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(post): JsonBody<Post>,
) -> Result<Json<UpdateAck>, AppError> {
    let id = parse_object_id(&id)?;
    let outcome = state.blog_service.update(id, post).await?;
    Ok(Json(outcome.into()))
}

/// Searches posts by title and, optionally, category.
///
/// # Endpoint
///
/// `GET /all-blogs?search=<regex>&filter=<category>`
///
/// `search` is matched case-insensitively against the title; a missing
/// `search` matches every post. An empty `filter` is ignored.
pub async fn search_posts_handler(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Json<Vec<DocumentResponse<Post>>>, AppError> {
    let posts = state.blog_service.search(&query.into()).await?;
    Ok(Json(documents(posts)))
}

/// Lists the posts owned by `email`.
///
/// # Endpoint
///
/// `GET /blog/{email}` (session cookie required)
///
/// # Errors
///
/// Returns 401 Unauthorized if the token is missing or invalid (see
/// [`crate::api::middleware::auth`]) and 403 Forbidden if it was issued for
/// another email.
pub async fn owner_posts_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<Vec<DocumentResponse<Post>>>, AppError> {
    let posts = state.blog_service.list_owned(&claims, &email).await?;
    Ok(Json(documents(posts)))
}
