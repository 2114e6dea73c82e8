use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::StudyServiceError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure surfaced to HTTP callers as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        tracing::warn!(error = %e, "Failed to read multipart upload");
        Self {
            status: e.status(),
            message: format!("Failed to read upload: {}", e.body_text()),
        }
    }
}

impl From<StudyServiceError> for ApiError {
    fn from(e: StudyServiceError) -> Self {
        tracing::error!(error = %e, "Study aid generation failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
