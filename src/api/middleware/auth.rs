//! Session cookie authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::application::services::auth_service::TOKEN_COOKIE;
use crate::{error::AppError, state::AppState};

/// Authenticates requests using the `token` session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: token=<jwt>
/// ```
///
/// # Authentication Flow
///
/// 1. Read the `token` cookie
/// 2. Verify signature and expiry via
///    [`crate::application::services::AuthService::verify`]
/// 3. Insert the decoded [`crate::application::services::TokenClaims`] into
///    request extensions
/// 4. Continue to next middleware/handler
///
/// The ownership check (token email vs. path email) is left to the handler.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The cookie is missing
/// - The token is malformed, badly signed, or expired
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/blog/{email}", get(owner_posts_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar.get(TOKEN_COOKIE).ok_or_else(|| {
        AppError::unauthenticated(
            "unauthorised token",
            json!({"reason": "Session cookie is missing"}),
        )
    })?;

    let claims = st.auth_service.verify(token.value())?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
