//! Store liveness check.

use async_trait::async_trait;

use crate::error::AppError;

/// Reports whether the backing store answers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Round-trips a no-op command to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;

    /// Short name of the backend, for diagnostics.
    fn backend(&self) -> &'static str;
}
