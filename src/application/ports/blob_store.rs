use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::value_objects::ReplayId;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Blob already exists: {0}")]
    AlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for physical blob storage, keyed by replay id.
///
/// Stored bytes are opaque to the store; compression happens in the use cases.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Durably write the blob for `id`. A published blob is never overwritten
    /// and is never visible to readers half-written.
    async fn put(&self, id: &ReplayId, bytes: Vec<u8>) -> Result<(), StorageError>;

    /// Read the raw stored bytes, or `StorageError::NotFound` when absent
    async fn get(&self, id: &ReplayId) -> Result<Vec<u8>, StorageError>;

    /// Check if a blob exists for `id`
    async fn exists(&self, id: &ReplayId) -> Result<bool, StorageError>;
}
