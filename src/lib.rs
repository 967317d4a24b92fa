//! EduDesk - Main Library
//!
//! EduDesk is a small student-management backend built on Axum. It provides
//! cookie-based JWT authentication for students, a registration and
//! dashboard API, and an admin surface over the raw records.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by every endpoint and binary
//!   - Response envelope used by every JSON endpoint
//!   - Application configuration and its builder
//!
//! - **`backend`** - Server-side code
//!   - Axum router, state and middleware
//!   - Authentication, student and admin handlers
//!   - Record store (PostgreSQL and in-memory)
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use edudesk::backend::server::{create_app, AppState};
//! use edudesk::backend::store::MemoryStore;
//! use edudesk::shared::AppConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("change-me").build()?;
//! let state = AppState::new(config, Arc::new(MemoryStore::new()));
//! let app = create_app(state);
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
pub mod backend;
