//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Session verification for student and admin routes
//! - **`json`** - JSON body extractor whose rejections use the error envelope
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use edudesk::backend::middleware::student_auth;
//! use edudesk::backend::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/dashboard", get(|| async { "ok" }))
//!         .route_layer(from_fn_with_state(state, student_auth))
//! }
//! ```

pub mod auth;
pub mod json;

pub use auth::{admin_auth, student_auth, verify_session, AuthUser, AuthenticatedUser};
pub use json::JsonBody;
