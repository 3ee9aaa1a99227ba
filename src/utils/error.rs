//! Error Handling Utilities
//!
//! Error types and HTTP error responses for the users API.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Main application error type shared by the service and API layers
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Validation errors for request payloads
    #[error("Validation error: {0}")]
    Validation(String),

    /// Field-level validation errors; `fields` maps each field to its messages
    #[error("Validation error: {message}")]
    InvalidFields {
        message: String,
        fields: serde_json::Value,
    },

    /// Operation declared by the API but not built yet
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// The 404 every user lookup currently resolves to
    pub fn user_not_found() -> Self {
        AppError::NotFound("User not found".to_string())
    }

    /// Status code this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::InvalidFields { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Standard error response structure for API endpoints
///
/// `detail` carries the human readable message so clients written against the
/// `{"detail": ...}` convention keep working.
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: &str, detail: &str) -> Self {
        Self {
            error: error.to_string(),
            detail: detail.to_string(),
            details: None,
        }
    }

    pub fn with_details(error: &str, detail: &str, details: serde_json::Value) -> Self {
        Self {
            error: error.to_string(),
            detail: detail.to_string(),
            details: Some(details),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error_code, message) = match self {
            AppError::InvalidFields { message, fields } => {
                let error_response =
                    ErrorResponse::with_details("VALIDATION_ERROR", &message, fields);
                return (status, Json(error_response)).into_response();
            }
            AppError::NotFound(msg) => ("NOT_FOUND", msg),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg),
            AppError::NotImplemented(what) => {
                ("NOT_IMPLEMENTED", format!("{} is not implemented", what))
            }
            AppError::Configuration(msg) => {
                log::error!("Configuration error while serving request: {}", msg);
                (
                    "CONFIGURATION_ERROR",
                    "Server configuration error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                log::error!("Internal error while serving request: {}", msg);
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let error_response = ErrorResponse::new(error_code, &message);
        (status, Json(error_response)).into_response()
    }
}

/// Request bodies axum cannot extract (bad JSON, missing fields, wrong
/// content type) are reported like any other invalid payload
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Result type alias for operations that can return AppError
pub type AppResult<T> = Result<T, AppError>;

/// Helper trait for converting other error types to AppError
pub trait IntoAppError<T> {
    fn into_app_error(self, context: &str) -> AppResult<T>;
}

impl<T, E> IntoAppError<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn into_app_error(self, context: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Internal(format!("{}: {}", context, e)))
    }
}
