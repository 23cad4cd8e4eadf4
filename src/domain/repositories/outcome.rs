//! Write acknowledgments returned by repositories.

use mongodb::bson::oid::ObjectId;

/// Result of inserting one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub inserted_id: ObjectId,
}

/// Result of an update-or-insert on one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpsertOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    /// Set only when no document matched and a new one was created.
    pub upserted_id: Option<ObjectId>,
}

/// Result of deleting by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}
