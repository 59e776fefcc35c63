//! Application state for the HTTP server.

use super::validation::ValidationLimits;

/// Shared application state passed to all handlers.
///
/// Immutable after startup; conversions themselves are stateless.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Accepted input range for both conversion endpoints
    pub limits: ValidationLimits,
}

impl AppState {
    /// Create a new application state with the given limits.
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }
}
