use axum::{
    extract::{Multipart, State},
    response::Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::api::errors::ApiError;
use crate::application::dto::{ReplaySubmission, UploadResponse};
use crate::application::use_cases::SubmitReplayUseCase;

/// State for the upload route
pub struct UploadState {
    pub use_case: Arc<SubmitReplayUseCase>,
    pub max_upload_bytes: usize,
}

/// POST /replay/
/// Upload a replay as exactly one multipart file part
#[utoipa::path(
    post,
    path = "/replay/",
    tag = "replays",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "Exactly one part containing a UTF-8 JSON document"
    ),
    responses(
        (status = 200, description = "Replay stored", body = UploadResponse),
        (status = 400, description = "Zero or several parts, or the part is not valid JSON"),
        (status = 413, description = "Upload exceeds the configured size ceiling"),
        (status = 500, description = "Internal storage error")
    )
)]
pub async fn upload_handler(
    State(state): State<Arc<UploadState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    // Every part counts toward the multiplicity check
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        debug!(
            field = field.name().unwrap_or_default(),
            file_name = field.file_name().unwrap_or_default(),
            "Reading upload part"
        );
        parts.push(field.bytes().await?);
    }

    let submission = ReplaySubmission::from_parts(parts, state.max_upload_bytes)?;
    let id = state.use_case.execute(submission).await?;

    Ok(Json(UploadResponse { id }))
}
