//! API error types with IntoResponse
//!
//! Every failure renders as `{"error": "<message>"}` JSON with the
//! matching 4xx status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use inkpost_core::ValidationErrors;

/// API error type with automatic HTTP status mapping
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unusable client input (400)
    #[error("{0}")]
    BadRequest(String),

    /// Field validation failed (400)
    #[error("{0}")]
    Validation(ValidationErrors),

    /// No post with the requested id (404)
    #[error("Post with id {id} not found")]
    PostNotFound { id: u64 },

    /// Client over its request quota (429)
    #[error("To many requests, try again later")]
    RateLimited,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PostNotFound { .. } => StatusCode::NOT_FOUND,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<inkpost_core::Error> for ApiError {
    fn from(e: inkpost_core::Error) -> Self {
        match e {
            inkpost_core::Error::PostNotFound { id } => Self::PostNotFound { id },
            inkpost_core::Error::Validation(errors) => Self::Validation(errors),
            other => Self::BadRequest(other.to_string()),
        }
    }
}
