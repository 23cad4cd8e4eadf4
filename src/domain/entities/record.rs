//! Stored document envelope shared by every collection.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Caller-supplied fields that the API passes through untouched.
pub type ExtraFields = Map<String, Value>;

/// Entity body that can be stored inside a [`Record`].
///
/// Implementors keep every field the API does not interpret in an
/// [`ExtraFields`] side map so documents round-trip unchanged.
pub trait DocumentFields:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    fn extra(&self) -> &ExtraFields;

    fn extra_mut(&mut self) -> &mut ExtraFields;

    /// String value at a dotted path such as `["owner", "email"]`.
    ///
    /// Returns `None` if any segment is missing or the value is not a string.
    fn str_at(&self, path: &[&str]) -> Option<&str> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.extra().get(*first)?, |value, key| value.get(*key))?
            .as_str()
    }
}

/// A document as it lives in the store: an optional `_id` plus the entity
/// fields flattened beside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Record<T> {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T: DocumentFields> Record<T> {
    /// Wraps request fields for insertion; the store assigns the id.
    ///
    /// A client-supplied `_id` is dropped so it can never shadow the
    /// generated identifier.
    pub fn new(mut fields: T) -> Self {
        fields.extra_mut().remove("_id");
        Self { id: None, fields }
    }

    /// Wraps request fields under an id chosen by the caller.
    pub fn with_id(id: ObjectId, fields: T) -> Self {
        let mut record = Self::new(fields);
        record.id = Some(id);
        record
    }
}
