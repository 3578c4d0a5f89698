use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tempfile::TempDir;

use crate::api::handlers::health_checks::ReadinessState;
use crate::api::handlers::{health_handler, readiness_handler};
use crate::application::ports::{IndexError, MockUploadIndex};

#[tokio::test]
async fn test_health_handler() {
    let (status, body) = health_handler().await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.0["status"], "healthy");
    assert_eq!(body.0["service"], "replay_store");
}

#[tokio::test]
async fn test_readiness_ready() {
    let dir = TempDir::new().unwrap();
    let mut mock_index = MockUploadIndex::new();
    mock_index.expect_ping().times(1).returning(|| Ok(()));

    let state = Arc::new(ReadinessState {
        index: Arc::new(mock_index),
        upload_root: dir.path().to_path_buf(),
    });

    let (status, body) = readiness_handler(State(state)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.0["status"], "ready");
    assert_eq!(body.0["checks"]["index"], "connected");
}

#[tokio::test]
async fn test_readiness_index_down() {
    let dir = TempDir::new().unwrap();
    let mut mock_index = MockUploadIndex::new();
    mock_index
        .expect_ping()
        .times(1)
        .returning(|| Err(IndexError::Database(sqlx::Error::PoolClosed)));

    let state = Arc::new(ReadinessState {
        index: Arc::new(mock_index),
        upload_root: dir.path().to_path_buf(),
    });

    let (status, body) = readiness_handler(State(state)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body.0["issues"][0], "Index connection closed");
}

#[tokio::test]
async fn test_readiness_blob_directory_missing() {
    let dir = TempDir::new().unwrap();
    let mut mock_index = MockUploadIndex::new();
    mock_index.expect_ping().times(1).returning(|| Ok(()));

    let state = Arc::new(ReadinessState {
        index: Arc::new(mock_index),
        upload_root: dir.path().join("missing"),
    });

    let (status, body) = readiness_handler(State(state)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body.0["checks"]["blob_store"], "unavailable");
}
