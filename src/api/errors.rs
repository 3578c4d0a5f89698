use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::{FetchError, ListError, UploadError};
use crate::domain::errors::ValidationError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Logs the detail and hides it from the client
    pub fn internal_error(detail: impl std::fmt::Display) -> Self {
        error!("Request failed with internal error: {}", detail);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal storage error")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::TooLarge { .. } => {
                ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, err.to_string())
            }
            ValidationError::Malformed(_) | ValidationError::Multiplicity(_) => {
                ApiError::bad_request(err.to_string())
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::new(err.status(), err.body_text())
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Validation(e) => e.into(),
            UploadError::Conflict(_) | UploadError::Index(_) | UploadError::Storage(_) => {
                ApiError::internal_error(err)
            }
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidId(e) => ApiError::bad_request(e.to_string()),
            FetchError::NotFound(_) => ApiError::not_found("not found"),
            FetchError::Storage(_) | FetchError::Corruption { .. } => ApiError::internal_error(err),
        }
    }
}

impl From<ListError> for ApiError {
    fn from(err: ListError) -> Self {
        ApiError::internal_error(err)
    }
}
