use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use utoipa::ToSchema;

use super::health_checks::{perform_readiness_checks, ReadinessState};

/// Basic health check response
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// GET /health
/// Basic health check endpoint (no storage check)
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "replay_store",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// GET /health/ready
/// Readiness probe covering the index and the blob directory
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready"),
        (status = 503, description = "Service is not ready")
    )
)]
pub async fn readiness_handler(
    State(state): State<Arc<ReadinessState>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let start_time = Instant::now();

    let checks = perform_readiness_checks(&state).await;
    let response_time = start_time.elapsed();

    if checks.healthy {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "service": "replay_store",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": response_time.as_millis(),
                "checks": checks.details,
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "service": "replay_store",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": response_time.as_millis(),
                "checks": checks.details,
                "issues": checks.issues,
            })),
        )
    }
}
