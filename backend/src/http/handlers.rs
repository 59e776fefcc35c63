//! HTTP handlers for the REST API.
//!
//! Each handler validates its input, delegates to the conversion engine and
//! wraps the outcome in the response envelope.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::Uri,
    response::Redirect,
    Json,
};
use tracing::debug;

use super::dto::{
    ConvertAllData, ConvertAllQuery, ConvertAllResponse, ConvertBody, ConvertResponse,
    HealthResponse, OriginalValue,
};
use super::error::AppError;
use super::openapi::openapi_document;
use super::state::AppState;
use super::validation::{self, FieldIssue};
use crate::routes::API_DOCS;
use crate::services::{self, conversion::format_number};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Service endpoints
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api-docs
pub async fn api_docs() -> Json<serde_json::Value> {
    Json(openapi_document())
}

/// GET /
///
/// Redirects to the API documentation.
pub async fn root_redirect() -> Redirect {
    Redirect::temporary(API_DOCS)
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {} not found", uri.path()))
}

// =============================================================================
// Conversion endpoints
// =============================================================================

/// POST /api/convert
///
/// Convert a single value between two scales.
pub async fn convert_temperature(
    State(state): State<AppState>,
    payload: Result<Json<ConvertBody>, JsonRejection>,
) -> HandlerResult<ConvertResponse> {
    let Json(body) = payload.map_err(|rejection| {
        AppError::validation(vec![FieldIssue::new("body", rejection.body_text())])
    })?;

    let request =
        validation::validate_conversion(&body, &state.limits).map_err(AppError::validation)?;
    let data = services::convert_request(&request)?;

    debug!(
        from = %request.from,
        to = %request.to,
        value = request.value,
        result = data.result,
        "converted temperature"
    );

    let message = format!(
        "Converted {}{} to {}",
        format_number(request.value),
        request.from.symbol(),
        request.to
    );

    Ok(Json(ConvertResponse {
        success: true,
        data,
        message,
    }))
}

/// GET /api/convert-all?value=<number>&from=<unit>
///
/// Convert a value into the two other scales.
pub async fn convert_to_all(
    State(state): State<AppState>,
    query: Result<Query<ConvertAllQuery>, QueryRejection>,
) -> HandlerResult<ConvertAllResponse> {
    let Query(query) = query.map_err(|rejection| {
        AppError::query_validation(vec![FieldIssue::new("query", rejection.body_text())])
    })?;

    let (value, from) = validation::validate_convert_all(&query, &state.limits)
        .map_err(AppError::query_validation)?;
    let conversions = services::convert_all(value, from)?;

    debug!(from = %from, value, count = conversions.len(), "converted to all scales");

    Ok(Json(ConvertAllResponse {
        success: true,
        data: ConvertAllData {
            original: OriginalValue { value, unit: from },
            conversions,
        },
    }))
}
