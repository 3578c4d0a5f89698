use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::ports::{BlobStore, StorageError};
use crate::domain::value_objects::ReplayId;
use crate::infrastructure::storage::PathBuilder;

/// Local filesystem blob store.
///
/// Blobs are written to a temp file and hard-linked into place, so readers
/// only ever see complete files and a published blob is never replaced.
pub struct LocalFilesystemStore {
    path_builder: PathBuilder,
    durable_writes: bool,
}

impl LocalFilesystemStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self::with_durability(base_path, true)
    }

    pub fn with_durability(base_path: PathBuf, durable_writes: bool) -> Self {
        Self {
            path_builder: PathBuilder::new(base_path),
            durable_writes,
        }
    }

    /// Initialize storage directories
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.path_builder.temp_root()).await?;
        Ok(())
    }

    pub fn upload_root(&self) -> &Path {
        self.path_builder.upload_root()
    }

    async fn write_temp(&self, path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        let mut file = File::create(path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        if self.durable_writes {
            file.sync_all().await?;
        }
        Ok(())
    }

    async fn sync_dir(&self, dir: &Path) {
        // The link already happened; a failed directory sync only weakens durability
        match File::open(dir).await {
            Ok(handle) => {
                if let Err(e) = handle.sync_all().await {
                    warn!("Failed to sync directory {:?} after publish: {}", dir, e);
                }
            }
            Err(e) => warn!("Failed to open directory {:?} for sync: {}", dir, e),
        }
    }
}

#[async_trait]
impl BlobStore for LocalFilesystemStore {
    async fn put(&self, id: &ReplayId, bytes: Vec<u8>) -> Result<(), StorageError> {
        let final_path = self.path_builder.final_path(id);

        // Published blobs are immutable
        if fs::try_exists(&final_path).await? {
            return Err(StorageError::AlreadyExists(id.to_string()));
        }

        // 1. Write to temp file
        let temp_path = self.path_builder.temp_path(Uuid::new_v4());
        debug!("Writing blob to temp file: {:?}", temp_path);
        if let Err(e) = self.write_temp(&temp_path, &bytes).await {
            warn!("Failed to write blob to temp file {:?}: {}", temp_path, e);
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        // 2. Atomic publish; the link fails if another writer got there first
        debug!("Linking blob into final location: {:?}", final_path);
        let linked = fs::hard_link(&temp_path, &final_path).await;
        if let Err(e) = fs::remove_file(&temp_path).await {
            warn!("Failed to remove temp file {:?}: {}", temp_path, e);
        }
        match linked {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(id.to_string()));
            }
            Err(e) => return Err(StorageError::Io(e)),
        }

        if self.durable_writes {
            self.sync_dir(self.path_builder.upload_root()).await;
        }

        Ok(())
    }

    async fn get(&self, id: &ReplayId) -> Result<Vec<u8>, StorageError> {
        let path = self.path_builder.final_path(id);

        fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(id.to_string())
            } else {
                StorageError::Io(e)
            }
        })
    }

    async fn exists(&self, id: &ReplayId) -> Result<bool, StorageError> {
        let path = self.path_builder.final_path(id);
        Ok(fs::try_exists(&path).await?)
    }
}
