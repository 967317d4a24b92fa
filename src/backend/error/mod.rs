//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and middleware.
//! Every error converts into an HTTP response carrying the JSON envelope.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` definition, status codes and messages
//! - **`conversion`** - `IntoResponse` and `From<StoreError>`
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use edudesk::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::Unauthorized)
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
