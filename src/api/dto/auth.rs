//! DTOs for session endpoints.

use serde::Serialize;

/// Body of `POST /jwt` and `GET /logout`.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
