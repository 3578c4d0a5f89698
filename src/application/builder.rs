use std::sync::Arc;

use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::{BlobStore, UploadIndex},
    use_cases::{
        AuditIndexUseCase, FetchReplayUseCase, ListReplaysUseCase, SubmitReplayUseCase,
    },
};
use crate::config::Config;
use crate::infrastructure::{
    persistence::SqliteUploadIndex,
    storage::{LocalFilesystemStore, PathBuilder},
};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    index: Option<Arc<dyn UploadIndex>>,
    blob_store: Option<Arc<dyn BlobStore>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            index: None,
            blob_store: None,
        }
    }

    /// Open the SQLite upload index under the storage path
    pub async fn with_index(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let index_path = self.config.index_path();
        info!("Opening upload index: {}", index_path.display());

        let index =
            SqliteUploadIndex::open(&index_path, self.config.db_max_connections).await?;
        self.index = Some(Arc::new(index));
        Ok(self)
    }

    /// Initialize the filesystem blob store under the storage path
    pub async fn with_blob_store(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let store = LocalFilesystemStore::with_durability(
            self.config.storage_path.clone(),
            self.config.durable_writes,
        );
        store.init().await?;
        info!("Blob store initialized at {}", store.upload_root().display());

        self.blob_store = Some(Arc::new(store));
        Ok(self)
    }

    /// Use externally constructed components (test doubles, alternative backends)
    pub fn with_components(
        mut self,
        index: Arc<dyn UploadIndex>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        self.index = Some(index);
        self.blob_store = Some(blob_store);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let index = self.index.ok_or("Upload index not initialized")?;
        let blob_store = self.blob_store.ok_or("Blob store not initialized")?;

        let submit_use_case = Arc::new(SubmitReplayUseCase::new(
            Arc::clone(&index),
            Arc::clone(&blob_store),
        ));
        let fetch_use_case = Arc::new(FetchReplayUseCase::new(Arc::clone(&blob_store)));
        let list_use_case = Arc::new(ListReplaysUseCase::new(Arc::clone(&index)));
        let audit_use_case = Arc::new(AuditIndexUseCase::new(
            Arc::clone(&index),
            Arc::clone(&blob_store),
        ));

        info!("Application layer initialized");

        Ok(AppState {
            index,
            submit_use_case,
            fetch_use_case,
            list_use_case,
            audit_use_case,
            upload_root: PathBuilder::new(&self.config.storage_path)
                .upload_root()
                .to_path_buf(),
            max_upload_bytes: self.config.max_upload_bytes,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockBlobStore, MockUploadIndex};
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> Config {
        let mut config = Config::from_lookup(|_| None);
        config.storage_path = dir.path().to_path_buf();
        config
    }

    #[test]
    fn test_build_without_components_fails() {
        let dir = TempDir::new().unwrap();
        let result = ApplicationBuilder::new(test_config(&dir)).build();

        assert!(result.is_err());
    }

    #[test]
    fn test_build_with_injected_components() {
        let dir = TempDir::new().unwrap();
        let state = ApplicationBuilder::new(test_config(&dir))
            .with_components(
                Arc::new(MockUploadIndex::new()),
                Arc::new(MockBlobStore::new()),
            )
            .build()
            .unwrap();

        assert_eq!(state.upload_root, dir.path().join("upload"));
        assert_eq!(state.max_upload_bytes, 1_000_000);
    }

    #[tokio::test]
    async fn test_build_with_real_storage_creates_layout() {
        let dir = TempDir::new().unwrap();
        let builder = ApplicationBuilder::new(test_config(&dir))
            .with_index()
            .await
            .unwrap()
            .with_blob_store()
            .await
            .unwrap();

        let state = builder.build().unwrap();

        assert!(dir.path().join("upload.db").is_file());
        assert!(state.upload_root.is_dir());
        state.index.close().await;
    }
}
