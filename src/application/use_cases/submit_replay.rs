use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::codec;
use crate::application::dto::ReplaySubmission;
use crate::application::ports::{
    BlobStore, IdGenerator, IndexError, RandomIdGenerator, StorageError, UploadIndex,
};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::ReplayId;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Replay id {0} is already indexed")]
    Conflict(ReplayId),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Use case: accept a replay, index it, then store its blob
pub struct SubmitReplayUseCase {
    index: Arc<dyn UploadIndex>,
    blob_store: Arc<dyn BlobStore>,
    id_generator: Arc<dyn IdGenerator>,
}

impl SubmitReplayUseCase {
    pub fn new(index: Arc<dyn UploadIndex>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self::with_id_generator(index, blob_store, Arc::new(RandomIdGenerator))
    }

    pub fn with_id_generator(
        index: Arc<dyn UploadIndex>,
        blob_store: Arc<dyn BlobStore>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            index,
            blob_store,
            id_generator,
        }
    }

    /// Execute upload workflow.
    ///
    /// The id is handed back only once both the index row and the blob are
    /// durable. The index row is always committed first, so a crash in between
    /// leaves an indexed id without a blob rather than an unlisted blob.
    pub async fn execute(&self, submission: ReplaySubmission) -> Result<ReplayId, UploadError> {
        // 1. Validate payload before touching any id or storage
        let document: serde_json::Value =
            serde_json::from_slice(submission.payload()).map_err(|e| {
                debug!("Rejecting malformed replay: {}", e);
                ValidationError::Malformed(e.to_string())
            })?;

        // 2. Re-encode compactly, number text untouched, and compress (nothing durable yet)
        let encoded = serde_json::to_vec(&document)
            .map_err(|e| StorageError::Internal(format!("Failed to encode replay: {}", e)))?;
        let compressed = codec::compress(&encoded).map_err(StorageError::Io)?;

        // 3. Issue id
        let id = self.id_generator.generate();
        info!(replay_id = %id, "Receiving replay {}", id);

        // 4. Commit to the index
        match self.index.insert(&id).await {
            Ok(record) => debug!(replay_id = %id, sequence = record.sequence(), "Replay indexed"),
            Err(IndexError::Conflict(_)) => {
                error!(replay_id = %id, "Generated replay id collides with an indexed id");
                return Err(UploadError::Conflict(id));
            }
            Err(e) => {
                error!(replay_id = %id, "Failed to index replay: {}", e);
                return Err(UploadError::Index(e));
            }
        }

        // 5. Publish the blob
        if let Err(e) = self.blob_store.put(&id, compressed).await {
            error!(
                replay_id = %id,
                "Failed to store replay blob, index row has no blob: {}", e
            );
            return Err(UploadError::Storage(e));
        }

        Ok(id)
    }
}
