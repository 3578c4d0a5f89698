use axum::response::Json;
use utoipa::OpenApi;

use crate::api::handlers::health::HealthResponse;
use crate::application::dto::{ReplayListResponse, UploadResponse};

/// OpenAPI specification for the replay store API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Replay Store API",
        version = "1.0.0",
        description = "Stores JSON replays under generated ids and serves them back"
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::upload::upload_handler,
        crate::api::handlers::list::list_handler,
        crate::api::handlers::fetch::fetch_handler,
        crate::api::handlers::fetch::preflight_handler,
    ),
    components(schemas(HealthResponse, UploadResponse, ReplayListResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "replays", description = "Replay upload and retrieval")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
