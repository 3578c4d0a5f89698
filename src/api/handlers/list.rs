use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::ReplayListResponse;
use crate::application::use_cases::ListReplaysUseCase;

/// GET /replay/
/// List every stored replay id
#[utoipa::path(
    get,
    path = "/replay/",
    tag = "replays",
    responses(
        (status = 200, description = "Known replay ids", body = ReplayListResponse),
        (status = 500, description = "Internal storage error")
    )
)]
pub async fn list_handler(
    State(use_case): State<Arc<ListReplaysUseCase>>,
) -> Result<Json<ReplayListResponse>, ApiError> {
    let response = use_case.execute().await?;
    Ok(Json(response))
}
