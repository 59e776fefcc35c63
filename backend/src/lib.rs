//! # Thermo Convert
//!
//! Temperature conversion between the Celsius, Fahrenheit and Kelvin scales,
//! exposed as a library and as a small REST API via Axum.
//!
//! ## Features
//!
//! - **Conversion**: six directed formulas with two-decimal rounding and a
//!   human-readable formula string
//! - **Fan-out**: convert one value into every other scale
//! - **Validation**: absolute-zero floors per scale
//! - **HTTP API**: `POST /api/convert` and `GET /api/convert-all`
//!
//! ## Architecture
//!
//! - [`models`]: unit enumeration and request/result types
//! - [`services`]: the conversion engine
//! - [`config`]: server configuration
//! - [`routes`]: route paths
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use thermo_convert::models::TemperatureUnit;
//! use thermo_convert::services::convert;
//!
//! let result = convert(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit).unwrap();
//! assert_eq!(result.result, 212.0);
//! assert_eq!(result.formula, "100°C × 9/5 + 32 = 212°F");
//! ```

pub mod config;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
