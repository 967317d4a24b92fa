//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── router.rs          - Main router creation and shared layers
//! ├── student_routes.rs  - /student routes
//! └── admin_routes.rs    - /admin routes
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `GET /` - Health check
//! - `POST /student/register`, `POST /student/login`, `POST /student/logout`
//! - `POST /admin/login`, `POST /admin/logout`
//!
//! ## Student session
//!
//! - `GET /student/dashboard`
//!
//! ## Admin session
//!
//! - `/admin/resources/...`

/// Main router creation
pub mod router;

/// Student routes
pub mod student_routes;

/// Admin routes
pub mod admin_routes;

pub use router::create_router;
