use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::entities::UploadRecord;
use crate::domain::value_objects::ReplayId;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Replay id already indexed: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt index row: {0}")]
    Corrupt(String),
}

/// Port for the durable index of known replay ids
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadIndex: Send + Sync {
    /// Durably commit a new record. Returns `IndexError::Conflict` if `id`
    /// is already present; the row is committed once this returns `Ok`.
    async fn insert(&self, id: &ReplayId) -> Result<UploadRecord, IndexError>;

    /// Every known id, possibly empty. Order carries no meaning.
    async fn list_all(&self) -> Result<Vec<ReplayId>, IndexError>;

    /// Connectivity check for readiness probes
    async fn ping(&self) -> Result<(), IndexError>;

    /// Release the underlying connections
    async fn close(&self);
}
