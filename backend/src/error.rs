//! Error handling for the Crop Advisor service
//!
//! Structural conditions (schema violations, startup failures) propagate as
//! errors; expected conditions (lookup misses, weather unavailability) are
//! modeled as values and never pass through here.

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
    // Data-contract violations in the location dataset
    #[error("location data is missing required column '{0}'")]
    MissingColumn(String),

    #[error("failed to parse location data: {0}")]
    LocationData(#[from] csv::Error),

    #[error("failed to read location data: {0}")]
    Io(#[from] std::io::Error),

    // Lookup misses surfaced over HTTP
    #[error("{0} not found")]
    NotFound(String),

    // Request validation
    #[error("validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("internal server error: {0}")]
    Internal(String),

    #[error("internal server error")]
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::MissingColumn(column) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "SCHEMA_ERROR".to_string(),
                    message: format!("Location data is missing required column '{}'", column),
                    field: Some(column.clone()),
                },
            ),
            AppError::LocationData(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "LOCATION_DATA_ERROR".to_string(),
                    message: format!("Failed to parse location data: {}", err),
                    field: None,
                },
            ),
            AppError::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "IO_ERROR".to_string(),
                    message: format!("Failed to read data: {}", err),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
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
