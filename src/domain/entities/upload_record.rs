use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ReplayId;

/// A committed row of the upload index.
///
/// Records are created once, when a submission passes validation, and are never
/// updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    sequence: i64,
    id: ReplayId,
    created_at: DateTime<Utc>,
}

impl UploadRecord {
    pub fn new(sequence: i64, id: ReplayId, created_at: DateTime<Utc>) -> Self {
        Self {
            sequence,
            id,
            created_at,
        }
    }

    pub fn sequence(&self) -> i64 {
        self.sequence
    }

    pub fn id(&self) -> &ReplayId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
