//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the student session endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - Credential check and login handler
//! └── logout.rs   - Logout handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /student/login - Sets the `studentToken` cookie
//! - **`logout`** - POST /student/logout - Clears the `studentToken` cookie
//!
//! `authenticate`, `session_headers` and `cleared_session_headers` are reused
//! by the admin login path with its own cookie and role.

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use login::{authenticate, login, session_headers};
pub use logout::{cleared_session_headers, logout};
pub use types::{LoginData, LoginRequest, LogoutResponse};
