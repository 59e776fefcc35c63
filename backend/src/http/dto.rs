//! Data Transfer Objects for the HTTP API.
//!
//! Request DTOs keep every field loosely typed so that validation can report
//! all problems at once instead of failing on the first bad field.

use serde::{Deserialize, Serialize};

use crate::models::{ConversionResult, TemperatureUnit};

use super::validation::FieldIssue;

/// Request body for `POST /api/convert`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertBody {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub from: Option<serde_json::Value>,
    #[serde(default)]
    pub to: Option<serde_json::Value>,
}

/// Query parameters for `GET /api/convert-all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertAllQuery {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
}

/// Response for a single conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub data: ConversionResult,
    /// Short summary, e.g. `Converted 100°C to fahrenheit`
    pub message: String,
}

/// The value a fan-out conversion started from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginalValue {
    pub value: f64,
    pub unit: TemperatureUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertAllData {
    pub original: OriginalValue,
    pub conversions: Vec<ConversionResult>,
}

/// Response for a fan-out conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertAllResponse {
    pub success: bool,
    pub data: ConvertAllData,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
}

/// Body of a 400 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub details: Vec<FieldIssue>,
}

/// Body of a 404/500 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}
