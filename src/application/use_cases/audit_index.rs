use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::application::ports::{BlobStore, IndexError, StorageError, UploadIndex};
use crate::domain::value_objects::ReplayId;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result of an index audit
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Number of ids found in the index.
    pub indexed: usize,
    /// Indexed ids that have no published blob.
    ///
    /// These are uploads whose process stopped between the index commit and
    /// the blob publish. Fetching them reports not found.
    pub missing_blobs: Vec<ReplayId>,
}

impl AuditReport {
    /// Returns true if every indexed id has its blob.
    pub fn is_consistent(&self) -> bool {
        self.missing_blobs.is_empty()
    }
}

/// Use case: report index rows whose blob was never published.
///
/// Because the index is always committed before the blob, the only
/// inconsistency a crash can leave is an indexed id without a blob. This audit
/// finds them and logs them. It never deletes or rewrites anything; what to do
/// with the rows is left to the operator.
///
/// # Examples
///
/// ```rust,ignore
/// let report = AuditIndexUseCase::new(index, blob_store).execute().await?;
/// if !report.is_consistent() {
///     eprintln!("{} replays lost their blob", report.missing_blobs.len());
/// }
/// ```
pub struct AuditIndexUseCase {
    index: Arc<dyn UploadIndex>,
    blob_store: Arc<dyn BlobStore>,
}

impl AuditIndexUseCase {
    pub fn new(index: Arc<dyn UploadIndex>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self { index, blob_store }
    }

    /// Walk the index once and check each id against the blob store.
    ///
    /// # Errors
    ///
    /// Fails on the first index or storage error; a partial report is not returned.
    pub async fn execute(&self) -> Result<AuditReport, AuditError> {
        let ids = self.index.list_all().await?;
        let mut report = AuditReport {
            indexed: ids.len(),
            missing_blobs: Vec::new(),
        };

        for id in ids {
            if !self.blob_store.exists(&id).await? {
                warn!(replay_id = %id, "Indexed replay has no blob");
                report.missing_blobs.push(id);
            }
        }

        info!(
            indexed = report.indexed,
            missing_blobs = report.missing_blobs.len(),
            "Index audit complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockBlobStore, MockUploadIndex};

    #[tokio::test]
    async fn test_audit_reports_missing_blobs() {
        let present = ReplayId::new();
        let missing = ReplayId::new();

        let mut mock_index = MockUploadIndex::new();
        mock_index
            .expect_list_all()
            .times(1)
            .returning(move || Ok(vec![present, missing]));

        let mut mock_blob_store = MockBlobStore::new();
        mock_blob_store
            .expect_exists()
            .times(2)
            .returning(move |id| Ok(*id == present));

        let use_case = AuditIndexUseCase::new(Arc::new(mock_index), Arc::new(mock_blob_store));

        let report = use_case.execute().await.unwrap();

        assert_eq!(report.indexed, 2);
        assert_eq!(report.missing_blobs, vec![missing]);
        assert!(!report.is_consistent());
    }

    #[tokio::test]
    async fn test_audit_of_empty_index_is_consistent() {
        let mut mock_index = MockUploadIndex::new();
        mock_index
            .expect_list_all()
            .times(1)
            .returning(|| Ok(Vec::new()));
        let mut mock_blob_store = MockBlobStore::new();
        mock_blob_store.expect_exists().times(0);

        let use_case = AuditIndexUseCase::new(Arc::new(mock_index), Arc::new(mock_blob_store));

        let report = use_case.execute().await.unwrap();

        assert!(report.is_consistent());
        assert_eq!(report, AuditReport::default());
    }
}
