//! Route paths served by the HTTP API.

/// Prefix for the conversion endpoints.
pub const API_PREFIX: &str = "/api";

/// POST: convert a single value between two scales.
pub const CONVERT: &str = "/convert";

/// GET: convert a value into every other scale.
pub const CONVERT_ALL: &str = "/convert-all";

pub const HEALTH: &str = "/health";

/// OpenAPI document.
pub const API_DOCS: &str = "/api-docs";
