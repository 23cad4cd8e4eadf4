//! Cross-origin policy for the browser front-end.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Creates the CORS layer.
///
/// Credentials are allowed so the session cookie travels with cross-origin
/// requests, which requires an explicit origin list. Origins that are not
/// valid header values are skipped with a warning.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .merge(api_routes())
///     .layer(cors::layer(&["http://localhost:5173".to_string()]));
/// ```
pub fn layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
