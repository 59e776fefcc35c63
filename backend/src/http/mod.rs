//! HTTP server module.
//!
//! This module provides an axum-based HTTP server that exposes the conversion
//! engine as a REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, security headers, error handling    │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::conversion)                     │
//! │  - Conversion formulas and rounding                       │
//! │  - Absolute-zero checks                                   │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;
pub mod validation;

pub use router::create_router;
pub use state::AppState;
