//! HTTP-facing error type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::application::services::CheckError;

/// Message returned when the threat service cannot be consulted.
pub const CHECK_FAILED_MESSAGE: &str = "Failed to check URL";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error returned by HTTP handlers.
///
/// Every variant renders as `{"error": "<message>"}`. Internal causes are
/// logged when the error is created and never sent to the client.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the client-facing message.
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(message) | AppError::Internal(message) => message,
        }
    }
}

impl From<CheckError> for AppError {
    fn from(e: CheckError) -> Self {
        match e {
            CheckError::ThreatLookup(source) => {
                error!(error = %source, "Threat lookup failed");
                AppError::internal(CHECK_FAILED_MESSAGE)
            }
            validation => AppError::bad_request(validation.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
