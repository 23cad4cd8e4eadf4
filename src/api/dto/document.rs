//! Wire representation of stored documents.

use serde::Serialize;

use crate::domain::entities::Record;

/// A stored document as sent to clients: the `ObjectId` is rendered as a
/// 24-character hex string and the entity fields sit beside it.
#[derive(Debug, Serialize)]
pub struct DocumentResponse<T> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> From<Record<T>> for DocumentResponse<T> {
    fn from(record: Record<T>) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()),
            fields: record.fields,
        }
    }
}

/// Converts a list of records for a JSON array response.
pub fn documents<T>(records: Vec<Record<T>>) -> Vec<DocumentResponse<T>> {
    records.into_iter().map(DocumentResponse::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Post;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn test_id_is_hex_string() {
        let id = ObjectId::new();
        let post: Post = serde_json::from_value(json!({ "title": "Hello", "x": 1 })).unwrap();

        let value = serde_json::to_value(DocumentResponse::from(Record::with_id(id, post))).unwrap();

        assert_eq!(value["_id"], id.to_hex());
        assert_eq!(value["title"], "Hello");
        assert_eq!(value["x"], 1);
    }
}
