use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::use_cases::FetchReplayUseCase;

/// GET /replay/{id}
/// Return the stored replay document as-is
#[utoipa::path(
    get,
    path = "/replay/{id}",
    tag = "replays",
    params(("id" = String, Path, description = "Replay id in canonical UUID form")),
    responses(
        (status = 200, description = "The replay document", body = serde_json::Value),
        (status = 400, description = "Not a valid ID"),
        (status = 404, description = "No replay with this id"),
        (status = 500, description = "Internal storage error")
    )
)]
pub async fn fetch_handler(
    State(use_case): State<Arc<FetchReplayUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let document = use_case.execute(&id).await?;
    Ok(Json(document))
}

/// OPTIONS /replay/{id}
/// CORS preflight; the headers come from the replay CORS middleware
#[utoipa::path(
    options,
    path = "/replay/{id}",
    tag = "replays",
    params(("id" = String, Path, description = "Replay id")),
    responses((status = 204, description = "Preflight accepted"))
)]
pub async fn preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
