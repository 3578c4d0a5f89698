use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::handlers::health_checks::ReadinessState;
use crate::api::handlers::{
    fetch_handler, health_handler, list_handler, preflight_handler, readiness_handler,
    upload_handler, UploadState,
};
use crate::api::middleware::cors;
use crate::api::openapi::openapi_handler;
use crate::application::ports::UploadIndex;
use crate::application::use_cases::{
    AuditIndexUseCase, FetchReplayUseCase, ListReplaysUseCase, SubmitReplayUseCase,
};

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<dyn UploadIndex>,
    pub submit_use_case: Arc<SubmitReplayUseCase>,
    pub fetch_use_case: Arc<FetchReplayUseCase>,
    pub list_use_case: Arc<ListReplaysUseCase>,
    pub audit_use_case: Arc<AuditIndexUseCase>,
    pub upload_root: std::path::PathBuf,
    pub max_upload_bytes: usize,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let upload_state = Arc::new(UploadState {
        use_case: Arc::clone(&state.submit_use_case),
        max_upload_bytes: state.max_upload_bytes,
    });
    let readiness_state = Arc::new(ReadinessState {
        index: Arc::clone(&state.index),
        upload_root: state.upload_root.clone(),
    });

    // Single-replay routes carry the permissive CORS headers
    let replay_routes = Router::new()
        .route(
            "/replay/{id}",
            get(fetch_handler)
                .options(preflight_handler)
                .with_state(Arc::clone(&state.fetch_use_case)),
        )
        .layer(axum_middleware::from_fn(cors::replay_cors_headers));

    Router::new()
        // Health checks
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(readiness_state),
        )
        .route("/api-docs/openapi.json", get(openapi_handler))
        // Replay API
        .route(
            "/replay/",
            post(upload_handler)
                .layer(DefaultBodyLimit::max(state.max_upload_bytes))
                .with_state(upload_state)
                .merge(get(list_handler).with_state(Arc::clone(&state.list_use_case))),
        )
        .merge(replay_routes)
        .layer(TraceLayer::new_for_http())
}
