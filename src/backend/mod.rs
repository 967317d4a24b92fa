//! Backend Module
//!
//! This module contains all server-side code for EduDesk: the Axum router,
//! application state, authentication, student endpoints, the admin surface
//! and the record store.
//!
//! # Architecture
//!
//! - **`server`** - Application state, configuration loading, app creation
//! - **`routes`** - Router assembly (CORS, tracing, body limit, route tables)
//! - **`auth`** - Password hashing, session tokens, cookies, login/logout
//! - **`students`** - Student registration and dashboard
//! - **`admin`** - Admin login and CRUD over the raw records
//! - **`store`** - `Store` trait with PostgreSQL and in-memory implementations
//! - **`middleware`** - Session verification for protected routes
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Request Lifecycle
//!
//! ```text
//! request -> CORS / body limit -> route dispatch
//!         -> session middleware (verify token, check role, attach identity)
//!         -> handler -> Store -> JSON envelope
//! ```
//!
//! Any `BackendError` returned by a handler or middleware is rendered by a
//! single `IntoResponse` implementation into `{statusCode, data: null, message}`.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - State, configuration, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── students/       - Student endpoints
//! ├── admin/          - Admin surface
//! ├── store/          - Record persistence
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: passwords, tokens, cookies and handlers
pub mod auth;

/// Student registration and dashboard
pub mod students;

/// Admin surface
pub mod admin;

/// Record store
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
pub use store::{MemoryStore, PgStore, Store};
