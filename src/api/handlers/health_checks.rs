//! Readiness checks against the index and the blob directory

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{IndexError, UploadIndex};

/// Everything the readiness probe looks at
pub struct ReadinessState {
    pub index: Arc<dyn UploadIndex>,
    pub upload_root: PathBuf,
}

/// Result of readiness checks
#[derive(Debug)]
pub struct ReadinessCheckResult {
    pub healthy: bool,
    pub details: Value,
    pub issues: Vec<String>,
}

/// Sanitize index error messages to prevent information leakage
pub fn sanitize_index_error(error: &IndexError) -> String {
    match error {
        IndexError::Conflict(_) => "Index constraint error".to_string(),
        IndexError::Corrupt(_) => "Index contains corrupt rows".to_string(),
        IndexError::Database(sqlx::Error::PoolClosed) => "Index connection closed".to_string(),
        IndexError::Database(sqlx::Error::PoolTimedOut) => "Index timeout".to_string(),
        IndexError::Database(sqlx::Error::Io(_)) => "Index I/O error".to_string(),
        IndexError::Database(_) => "Index error".to_string(),
    }
}

/// Ping the index with a timeout
pub async fn check_index(index: &dyn UploadIndex) -> Result<(), String> {
    match tokio::time::timeout(Duration::from_secs(2), index.ping()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(sanitize_index_error(&e)),
        Err(_) => Err("Index check timed out".to_string()),
    }
}

/// Check that the blob directory is present
pub async fn check_blob_directory(upload_root: &Path) -> Result<(), String> {
    match tokio::fs::metadata(upload_root).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err("Blob path is not a directory".to_string()),
        Err(_) => Err("Blob directory missing".to_string()),
    }
}

pub async fn perform_readiness_checks(state: &ReadinessState) -> ReadinessCheckResult {
    let mut issues = Vec::new();

    let index = check_index(state.index.as_ref()).await;
    let blobs = check_blob_directory(&state.upload_root).await;

    if let Err(issue) = &index {
        issues.push(issue.clone());
    }
    if let Err(issue) = &blobs {
        issues.push(issue.clone());
    }

    ReadinessCheckResult {
        healthy: issues.is_empty(),
        details: json!({
            "index": if index.is_ok() { "connected" } else { "unavailable" },
            "blob_store": if blobs.is_ok() { "available" } else { "unavailable" },
        }),
        issues,
    }
}
