//! Shared MongoDB client and database handle.

use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Cursor, Database};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Collection holding blog posts.
pub const POSTS_COLLECTION: &str = "Blogs";
/// Collection holding wishlist entries.
pub const WISHLIST_COLLECTION: &str = "wishlist";
/// Collection holding comments.
pub const COMMENTS_COLLECTION: &str = "comments";

/// Process-wide store handle.
///
/// Created once at startup and cloned into each repository. Cloning is cheap:
/// every clone shares the driver's connection pool.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Connects to the deployment at `uri` and selects `database`.
    ///
    /// The driver connects lazily, so this does not fail on an unreachable
    /// server; call [`MongoStore::ping`] to check connectivity.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    /// Sends `{ ping: 1 }` to the server.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Counts documents in each collection the API uses.
    pub async fn collection_counts(&self) -> Result<Vec<(&'static str, u64)>, AppError> {
        let mut counts = Vec::with_capacity(3);
        for name in [POSTS_COLLECTION, WISHLIST_COLLECTION, COMMENTS_COLLECTION] {
            let count = self
                .collection::<Document>(name)
                .count_documents(doc! {})
                .await?;
            counts.push((name, count));
        }
        Ok(counts)
    }

    /// Closes pooled connections and ends server sessions.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

/// Drains a cursor into a vector.
pub(crate) async fn collect<T>(mut cursor: Cursor<T>) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned + Send + Sync,
{
    let mut items = Vec::new();
    while cursor.advance().await? {
        items.push(cursor.deserialize_current()?);
    }
    Ok(items)
}

/// Serializes entity fields for use in a `$set` update.
pub(crate) fn to_set_document<T: serde::Serialize>(fields: &T) -> Result<Document, AppError> {
    mongodb::bson::to_document(fields).map_err(|e| {
        AppError::internal(
            "Failed to encode document",
            serde_json::json!({ "reason": e.to_string() }),
        )
    })
}

/// Extracts the generated id from an insert result.
pub(crate) fn inserted_object_id(
    id: &mongodb::bson::Bson,
) -> Result<mongodb::bson::oid::ObjectId, AppError> {
    id.as_object_id().ok_or_else(|| {
        AppError::internal(
            "Store returned a non-ObjectId identifier",
            serde_json::json!({ "inserted_id": id.to_string() }),
        )
    })
}
