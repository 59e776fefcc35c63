//! Request validation for the conversion endpoints.
//!
//! Both endpoints go through [`check_value`], so a value accepted by one is
//! accepted by the other. A value must be a finite number inside the
//! configured range and at or above absolute zero for its source unit.

use serde::{Deserialize, Serialize};

use crate::models::{ConversionRequest, TemperatureUnit};
use crate::services::is_physically_valid;

use super::dto::{ConvertAllQuery, ConvertBody};

/// Lowest accepted value, whatever the unit.
pub const MIN_VALUE: f64 = -273.15;

/// Highest accepted value, whatever the unit.
pub const MAX_VALUE: f64 = 10000.0;

/// Accepted range for input values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min: MIN_VALUE,
            max: MAX_VALUE,
        }
    }
}

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Offending field (`value`, `from`, `to`, or `body`)
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Parse a unit field, recording an issue when it is missing or unknown.
fn check_unit(
    field: &str,
    raw: Option<&str>,
    issues: &mut Vec<FieldIssue>,
) -> Option<TemperatureUnit> {
    match raw {
        None => {
            issues.push(FieldIssue::new(field, format!("{} is required", field)));
            None
        }
        Some(s) => match s.parse() {
            Ok(unit) => Some(unit),
            Err(_) => {
                issues.push(FieldIssue::new(
                    field,
                    format!("{} must be one of: celsius, fahrenheit, kelvin", field),
                ));
                None
            }
        },
    }
}

/// Range and physical-floor checks on an already numeric value.
///
/// The unit floor is only checked once the value is inside the range, so a
/// single problem is reported per value.
pub fn check_value(
    value: f64,
    unit: Option<TemperatureUnit>,
    limits: &ValidationLimits,
    issues: &mut Vec<FieldIssue>,
) {
    if !value.is_finite() {
        issues.push(FieldIssue::new("value", "value must be a finite number"));
    } else if value < limits.min {
        issues.push(FieldIssue::new(
            "value",
            format!("Temperature cannot be below absolute zero ({}°C)", limits.min),
        ));
    } else if value > limits.max {
        issues.push(FieldIssue::new(
            "value",
            format!("Temperature is too high (maximum {})", limits.max),
        ));
    } else if let Some(unit) = unit {
        if !is_physically_valid(value, unit) {
            issues.push(FieldIssue::new(
                "value",
                format!(
                    "Temperature cannot be below absolute zero for {} ({}{})",
                    unit,
                    unit.absolute_zero(),
                    unit.symbol()
                ),
            ));
        }
    }
}

/// Validate a `POST /api/convert` body.
pub fn validate_conversion(
    body: &ConvertBody,
    limits: &ValidationLimits,
) -> Result<ConversionRequest, Vec<FieldIssue>> {
    let mut issues = Vec::new();

    let from = check_unit("from", body.from.as_ref().map(unit_text), &mut issues);
    let to = check_unit("to", body.to.as_ref().map(unit_text), &mut issues);

    let value = match &body.value {
        None => {
            issues.push(FieldIssue::new("value", "value is required"));
            None
        }
        Some(v) => match v.as_f64() {
            Some(n) => Some(n),
            None => {
                issues.push(FieldIssue::new("value", "value must be a number"));
                None
            }
        },
    };

    if let Some(value) = value {
        check_value(value, from, limits, &mut issues);
    }

    match (value, from, to) {
        (Some(value), Some(from), Some(to)) if issues.is_empty() => {
            Ok(ConversionRequest::new(value, from, to))
        }
        _ => Err(issues),
    }
}

/// Validate `GET /api/convert-all` query parameters.
///
/// `value` arrives as text and is coerced to a number first.
pub fn validate_convert_all(
    query: &ConvertAllQuery,
    limits: &ValidationLimits,
) -> Result<(f64, TemperatureUnit), Vec<FieldIssue>> {
    let mut issues = Vec::new();

    let from = check_unit("from", query.from.as_deref(), &mut issues);

    let value = match query.value.as_deref().map(str::trim) {
        None => {
            issues.push(FieldIssue::new("value", "value is required"));
            None
        }
        Some(raw) => match raw.parse::<f64>() {
            Ok(n) => Some(n),
            Err(_) => {
                issues.push(FieldIssue::new("value", "value must be a number"));
                None
            }
        },
    };

    if let Some(value) = value {
        check_value(value, from, limits, &mut issues);
    }

    match (value, from) {
        (Some(value), Some(from)) if issues.is_empty() => Ok((value, from)),
        _ => Err(issues),
    }
}

/// Units must be JSON strings; anything else is treated as an unknown name.
fn unit_text(value: &serde_json::Value) -> &str {
    value.as_str().unwrap_or("")
}
