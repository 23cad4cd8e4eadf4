//! Handlers for session token endpoints.

use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;

use crate::api::dto::auth::SuccessResponse;
use crate::api::extract::JsonBody;
use crate::domain::entities::ExtraFields;
use crate::error::AppError;
use crate::state::AppState;

/// Signs the identity payload and sets the session cookie.
///
/// # Endpoint
///
/// `POST /jwt`
///
/// # Request Body
///
/// Any JSON object; `email` is the claim used for ownership checks.
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// `Set-Cookie: token=<jwt>; HttpOnly; Path=/; ...` and `{"success": true}`.
pub async fn issue_token_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(payload): JsonBody<ExtraFields>,
) -> Result<(CookieJar, Json<SuccessResponse>), AppError> {
    let token = state.auth_service.issue(payload)?;
    let cookie = state.auth_service.session_cookie(token);

    Ok((jar.add(cookie), Json(SuccessResponse::ok())))
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `GET /logout`
///
/// Always answers `{"success": true}`, whether or not a cookie was sent.
pub async fn logout_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    (
        jar.add(state.auth_service.removal_cookie()),
        Json(SuccessResponse::ok()),
    )
}
