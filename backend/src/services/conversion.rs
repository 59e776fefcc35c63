//! Temperature conversion engine.
//!
//! Pure functions: no I/O, no shared state. Safe to call from any number of
//! concurrent requests.

use crate::models::{ConversionRequest, ConversionResult, TemperatureUnit};

/// Formula string returned for same-scale conversions.
pub const NO_CONVERSION_NEEDED: &str = "no conversion needed";

/// Result type for conversion operations
pub type ConversionOutcome<T> = Result<T, ConversionError>;

/// Error type for conversion operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// No formula is defined for the pair. Only reachable if a unit is added
    /// without its formulas.
    #[error("Unsupported conversion: {from} to {to}")]
    UnsupportedConversion {
        from: TemperatureUnit,
        to: TemperatureUnit,
    },
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

pub fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0 + 273.15
}

pub fn kelvin_to_fahrenheit(k: f64) -> f64 {
    (k - 273.15) * 9.0 / 5.0 + 32.0
}

/// Round to two decimal places, half away from zero. Negative zero collapses to zero.
///
/// Magnitudes too large to scale by 100 carry no hundredths and are returned as is.
pub(crate) fn round_to_hundredths(x: f64) -> f64 {
    let scaled = x * 100.0;
    if !scaled.is_finite() {
        return x;
    }
    let rounded = scaled.round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Shortest decimal form of a number, as used inside formula strings.
pub(crate) fn format_number(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else {
        x.to_string()
    }
}

/// Convert `value` from one scale to another.
///
/// Same-scale requests return the value untouched. Otherwise the result is
/// rounded to two decimals and the formula string embeds the input as given
/// and the rounded result.
///
/// Absolute-zero floors are not enforced here; see [`is_physically_valid`].
pub fn convert(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> ConversionOutcome<ConversionResult> {
    use TemperatureUnit::*;

    if from == to {
        return Ok(ConversionResult {
            from,
            to,
            value,
            result: value,
            formula: NO_CONVERSION_NEEDED.to_string(),
        });
    }

    let (formula_fn, template): (fn(f64) -> f64, &str) = match (from, to) {
        (Celsius, Fahrenheit) => (celsius_to_fahrenheit, "{v}°C × 9/5 + 32 = {r}°F"),
        (Fahrenheit, Celsius) => (fahrenheit_to_celsius, "({v}°F - 32) × 5/9 = {r}°C"),
        (Celsius, Kelvin) => (celsius_to_kelvin, "{v}°C + 273.15 = {r}K"),
        (Kelvin, Celsius) => (kelvin_to_celsius, "{v}K - 273.15 = {r}°C"),
        (Fahrenheit, Kelvin) => (fahrenheit_to_kelvin, "({v}°F - 32) × 5/9 + 273.15 = {r}K"),
        (Kelvin, Fahrenheit) => (kelvin_to_fahrenheit, "({v}K - 273.15) × 9/5 + 32 = {r}F"),
        _ => {
            log::error!("no conversion formula registered for {} -> {}", from, to);
            return Err(ConversionError::UnsupportedConversion { from, to });
        }
    };

    let result = round_to_hundredths(formula_fn(value));
    let formula = template
        .replace("{v}", &format_number(value))
        .replace("{r}", &format_number(result));

    Ok(ConversionResult {
        from,
        to,
        value,
        result,
        formula,
    })
}

/// Convenience wrapper over [`convert`] for an already-built request.
pub fn convert_request(request: &ConversionRequest) -> ConversionOutcome<ConversionResult> {
    convert(request.value, request.from, request.to)
}

/// Convert `value` into every other scale, in [`TemperatureUnit::ALL`] order.
///
/// The source scale is skipped, so the result always holds two entries.
pub fn convert_all(
    value: f64,
    from: TemperatureUnit,
) -> ConversionOutcome<Vec<ConversionResult>> {
    TemperatureUnit::ALL
        .iter()
        .filter(|&&to| to != from)
        .map(|&to| convert(value, from, to))
        .collect()
}

/// Whether `value` is a finite temperature at or above absolute zero for `unit`.
pub fn is_physically_valid(value: f64, unit: TemperatureUnit) -> bool {
    value.is_finite() && value >= unit.absolute_zero()
}
