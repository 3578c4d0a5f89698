//! Shared test fixtures and utilities for all test types
//!
//! Every environment runs against a fresh temp directory with the real SQLite
//! index and filesystem blob store.
#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use std::path::PathBuf;
use tempfile::TempDir;

use replay_store::api::{create_router, router::AppState};
use replay_store::application::builder::ApplicationBuilder;
use replay_store::Config;

pub const BOUNDARY: &str = "replay-test-boundary";

/// Test environment container with all necessary components
pub struct TestEnvironment {
    pub dir: TempDir,
    pub state: AppState,
    pub app: Router,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp storage dir");
        Self::at(dir).await
    }

    /// Environment over an existing directory, as after a restart
    pub async fn at(dir: TempDir) -> Self {
        Self::with_config(dir, |_| {}).await
    }

    pub async fn with_config(dir: TempDir, tweak: impl FnOnce(&mut Config)) -> Self {
        let mut config = test_config(dir.path().to_path_buf());
        tweak(&mut config);

        let state = ApplicationBuilder::new(config)
            .with_index()
            .await
            .expect("Failed to open index")
            .with_blob_store()
            .await
            .expect("Failed to init blob store")
            .build()
            .expect("Failed to build application");
        let app = create_router(state.clone());

        Self { dir, state, app }
    }

    /// Close the index and hand back the directory for a restart
    pub async fn shutdown(self) -> TempDir {
        self.state.index.close().await;
        self.dir
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.dir.path().join("upload")
    }

    /// Published blob files, excluding the staging directory
    pub fn blob_files(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.upload_dir())
            .expect("Failed to read upload dir")
            .map(|entry| entry.expect("Bad dir entry").path())
            .filter(|path| path.is_file())
            .collect()
    }
}

pub fn test_config(storage_path: PathBuf) -> Config {
    let mut config = Config::from_lookup(|_| None);
    config.storage_path = storage_path;
    config.durable_writes = false;
    config.audit_on_startup = false;
    config
}

/// Encode `parts` as a multipart/form-data body of file fields
pub fn multipart_body(parts: &[&[u8]]) -> Vec<u8> {
    let mut body = Vec::new();
    for (i, content) in parts.iter().enumerate() {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"file{i}\"; filename=\"replay{i}.json\"\r\n\
                 Content-Type: application/json\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn upload_request(parts: &[&[u8]]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/replay/")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to extract JSON response
pub async fn extract_json_response(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
