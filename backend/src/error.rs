//! Error handling for the Plant Care Assistant
//!
//! Every suggestion-flow failure surfaces as a single user-facing error
//! with a retry affordance; reminder operations never produce errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Suggestion flow errors
    #[error("Room conditions have not been submitted")]
    MissingRoomConditions,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Suggestion service error: {0}")]
    SuggestionService(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    /// Whether re-triggering the same request can succeed without a code
    /// or input change
    pub retryable: bool,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg.clone(),
                    retryable: false,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    retryable: false,
                },
            ),
            AppError::MissingRoomConditions => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "MISSING_ROOM_CONDITIONS".to_string(),
                    message: "No room conditions provided. Please fill out the room form first."
                        .to_string(),
                    retryable: true,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    retryable: true,
                },
            ),
            AppError::SuggestionService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "SUGGESTION_SERVICE_ERROR".to_string(),
                    message: format!("Suggestion service error: {}", msg),
                    retryable: true,
                },
            ),
            AppError::SchemaViolation(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "SCHEMA_VIOLATION".to_string(),
                    message: format!("Suggestion service returned an invalid response: {}", msg),
                    retryable: true,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    retryable: false,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
