//! Shared Module
//!
//! Types used across the backend and the binaries that carry no dependency
//! on the database: the JSON response envelope and the application
//! configuration.

/// JSON response envelope
pub mod response;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use response::ApiResponse;
