//! MongoDB liveness check.

use async_trait::async_trait;

use super::mongo_store::MongoStore;
use crate::domain::repositories::HealthRepository;
use crate::error::AppError;

pub struct MongoHealthRepository {
    store: MongoStore,
}

impl MongoHealthRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            store: store.clone(),
        }
    }
}

#[async_trait]
impl HealthRepository for MongoHealthRepository {
    async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
