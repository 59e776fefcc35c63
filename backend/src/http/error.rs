//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::dto::{FailureResponse, ValidationErrorResponse};
use super::validation::FieldIssue;
use crate::services::ConversionError;

pub const BODY_VALIDATION_FAILED: &str = "Validation failed";
pub const QUERY_VALIDATION_FAILED: &str = "Query validation failed";

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request rejected before reaching the engine
    Validation {
        error: &'static str,
        details: Vec<FieldIssue>,
    },
    /// Engine failure
    Conversion(ConversionError),
    /// Unknown route
    NotFound(String),
}

impl AppError {
    /// Body validation failure.
    pub fn validation(details: Vec<FieldIssue>) -> Self {
        AppError::Validation {
            error: BODY_VALIDATION_FAILED,
            details,
        }
    }

    /// Query-string validation failure.
    pub fn query_validation(details: Vec<FieldIssue>) -> Self {
        AppError::Validation {
            error: QUERY_VALIDATION_FAILED,
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation { error, details } => {
                warn!(reason = error, issues = details.len(), "rejected request");
                let body = ValidationErrorResponse {
                    error: error.to_string(),
                    details,
                };
                (status, Json(body)).into_response()
            }
            AppError::Conversion(e) => {
                error!("conversion failed: {}", e);
                failure(status, e.to_string())
            }
            AppError::NotFound(msg) => failure(status, msg),
        }
    }
}

fn failure(status: StatusCode, error: String) -> Response {
    let body = FailureResponse {
        success: false,
        error,
    };
    (status, Json(body)).into_response()
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        AppError::Conversion(err)
    }
}
