//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. Errors are terminal for the
//! request: the variant decides the status code and the body carries a short
//! `message` for the front-end.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::error::ErrorKind;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Server error code MongoDB reports for an unparsable `$regex`.
const INVALID_REGEX_CODE: i32 = 51091;

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "is_empty_details")]
    details: Value,
}

fn is_empty_details(details: &Value) -> bool {
    match details {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing, malformed, badly signed or expired session token.
    #[error("{message}")]
    Unauthenticated { message: String, details: Value },
    /// Authenticated, but the token identity does not own the resource.
    #[error("{message}")]
    Forbidden { message: String, details: Value },
    /// Malformed identifier or query term.
    #[error("{message}")]
    InvalidArgument { message: String, details: Value },
    /// The document store could not be reached.
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthenticated(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthenticated {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_argument(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            AppError::Unavailable { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated { .. } => "unauthenticated",
            AppError::Forbidden { .. } => "forbidden",
            AppError::InvalidArgument { .. } => "invalid_argument",
            AppError::Unavailable { .. } => "unavailable",
            AppError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            AppError::Unauthenticated { message, details }
            | AppError::Forbidden { message, details }
            | AppError::InvalidArgument { message, details }
            | AppError::Unavailable { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        if status.is_server_error() {
            tracing::error!(code, %message, %details, "Request failed");
        }

        let body = ErrorBody {
            code,
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_argument(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::invalid_argument(
            "Invalid query string",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        map_mongo_error(e)
    }
}

/// Classifies a driver error into the application taxonomy.
///
/// Connectivity failures become [`AppError::Unavailable`], a regex rejected
/// by the server becomes [`AppError::InvalidArgument`], everything else is
/// [`AppError::Internal`].
pub fn map_mongo_error(e: mongodb::error::Error) -> AppError {
    match e.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => {
            AppError::unavailable("Document store unavailable", json!({}))
        }
        ErrorKind::Command(cmd) if cmd.code == INVALID_REGEX_CODE => {
            AppError::invalid_argument("Invalid search expression", json!({}))
        }
        _ => AppError::internal("Database error", json!({})),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (
                AppError::unauthenticated("unauthorised token", json!({})),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::forbidden("forbidden token", json!({})),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::invalid_argument("Invalid identifier", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::unavailable("down", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::internal("boom", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let (status, _) = body_json(err).await;
            assert_eq!(status, expected);
        }
    }

    #[tokio::test]
    async fn test_body_has_message_and_code() {
        let (_, body) = body_json(AppError::forbidden("forbidden token", json!({}))).await;

        assert_eq!(body["message"], "forbidden token");
        assert_eq!(body["code"], "forbidden");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_body_keeps_details() {
        let (_, body) =
            body_json(AppError::invalid_argument("Invalid identifier", json!({"id": "xyz"})))
                .await;

        assert_eq!(body["details"]["id"], "xyz");
    }

    #[tokio::test]
    async fn test_json_rejection_is_invalid_argument() {
        use axum::extract::{FromRequest, Request};

        let req = Request::builder()
            .method("POST")
            .uri("/blogs")
            .body(axum::body::Body::from("title=Hello"))
            .unwrap();
        let rejection = Json::<Value>::from_request(req, &()).await.unwrap_err();

        let (status, body) = body_json(rejection.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_argument");
        assert_eq!(body["message"], "Invalid request body");
        assert!(body["details"]["reason"].as_str().unwrap().contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_query_rejection_is_invalid_argument() {
        use axum::extract::Query;
        use std::collections::HashMap;

        let uri = "/all-blogs?limit=ten".parse().unwrap();
        let rejection = Query::<HashMap<String, u32>>::try_from_uri(&uri).unwrap_err();

        let (status, body) = body_json(rejection.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_argument");
        assert_eq!(body["message"], "Invalid query string");
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::internal("Database error", json!({}));
        assert_eq!(err.to_string(), "Database error");
    }
}
