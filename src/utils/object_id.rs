//! Parsing of document identifiers from request paths.

use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::error::AppError;

/// Parses a 24-character hex `ObjectId`.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] for anything else.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::invalid_argument("Invalid identifier", json!({ "id": raw })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_invalid() {
        for raw in ["", "123", "zzzzzzzzzzzzzzzzzzzzzzzz", "65f0c0ffee65f0c0ffee65f0c0"] {
            assert!(matches!(
                parse_object_id(raw),
                Err(AppError::InvalidArgument { .. })
            ));
        }
    }
}
