use std::path::{Path, PathBuf};

use crate::domain::value_objects::ReplayId;

/// Utility for generating storage paths
pub struct PathBuilder {
    upload_root: PathBuf,
}

impl PathBuilder {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            upload_root: base_path.as_ref().join("upload"),
        }
    }

    /// Directory holding published blobs: /base/upload
    pub fn upload_root(&self) -> &Path {
        &self.upload_root
    }

    /// Staging directory, on the same filesystem as the blobs so linking is atomic
    pub fn temp_root(&self) -> PathBuf {
        self.upload_root.join(".tmp")
    }

    /// Generate temp write path: /base/upload/.tmp/{uuid}
    pub fn temp_path(&self, id: uuid::Uuid) -> PathBuf {
        self.temp_root().join(id.to_string())
    }

    /// Generate final blob path: /base/upload/{replay_id}.json.gz
    pub fn final_path(&self, id: &ReplayId) -> PathBuf {
        self.upload_root.join(format!("{}.json.gz", id))
    }
}
