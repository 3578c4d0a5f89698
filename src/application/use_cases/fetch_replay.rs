use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::application::codec;
use crate::application::ports::{BlobStore, StorageError};
use crate::domain::errors::InvalidReplayId;
use crate::domain::value_objects::ReplayId;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    InvalidId(#[from] InvalidReplayId),

    #[error("Replay not found: {0}")]
    NotFound(ReplayId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Stored replay {id} is corrupt: {reason}")]
    Corruption { id: ReplayId, reason: String },
}

/// Use case: load a stored replay document
pub struct FetchReplayUseCase {
    blob_store: Arc<dyn BlobStore>,
}

impl FetchReplayUseCase {
    pub fn new(blob_store: Arc<dyn BlobStore>) -> Self {
        Self { blob_store }
    }

    /// Execute fetch from the raw, untrusted id string.
    /// Syntax is checked before any storage access.
    pub async fn execute(&self, raw_id: &str) -> Result<serde_json::Value, FetchError> {
        let id: ReplayId = raw_id.parse()?;
        self.execute_by_id(&id).await
    }

    pub async fn execute_by_id(&self, id: &ReplayId) -> Result<serde_json::Value, FetchError> {
        let compressed = match self.blob_store.get(id).await {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound(_)) => return Err(FetchError::NotFound(*id)),
            Err(e) => return Err(FetchError::Storage(e)),
        };

        let raw = codec::decompress(&compressed).map_err(|e| corruption(id, e.to_string()))?;
        serde_json::from_slice(&raw).map_err(|e| corruption(id, e.to_string()))
    }
}

fn corruption(id: &ReplayId, reason: String) -> FetchError {
    error!(replay_id = %id, "Stored replay failed to decode: {}", reason);
    FetchError::Corruption { id: *id, reason }
}
