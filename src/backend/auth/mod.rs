//! Authentication Module
//!
//! This module handles password hashing, session tokens, session cookies and
//! the login/logout handlers.
//!
//! # Architecture
//!
//! - **`passwords`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token generation and validation
//! - **`cookies`** - `Set-Cookie` construction and `Cookie` parsing
//! - **`handlers`** - HTTP handlers for the student session endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── passwords.rs    - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── cookies.rs      - Session cookies
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email + password → credentials and role verified → signed
//!    token set as an `HttpOnly` cookie
//! 2. **Protected request**: cookie read → token verified → role checked →
//!    user re-fetched and attached to the request (see `middleware::auth`)
//! 3. **Logout**: cookie cleared, always 200
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless and expire after one day
//! - Invalid credentials return 401 with no hint about which check failed

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Session cookies
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use cookies::{ADMIN_COOKIE, STUDENT_COOKIE};
pub use handlers::{login, logout, LoginRequest};
pub use sessions::{Claims, SessionKeys};
