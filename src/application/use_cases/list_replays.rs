use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::ReplayListResponse;
use crate::application::ports::{IndexError, UploadIndex};

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Index error: {0}")]
    Index(#[from] IndexError),
}

/// Use case: enumerate every indexed replay id
pub struct ListReplaysUseCase {
    index: Arc<dyn UploadIndex>,
}

impl ListReplaysUseCase {
    pub fn new(index: Arc<dyn UploadIndex>) -> Self {
        Self { index }
    }

    pub async fn execute(&self) -> Result<ReplayListResponse, ListError> {
        let uploads = self.index.list_all().await?;
        Ok(ReplayListResponse { uploads })
    }
}
