//! Admin Surface
//!
//! CRUD over users, student and teacher profiles, attendance and marks,
//! mounted at `/admin` and authenticated with the `adminSession` cookie.
//!
//! # Module Structure
//!
//! ```text
//! admin/
//! ├── mod.rs         - Module exports
//! ├── auth.rs        - Admin login and logout
//! ├── resources.rs   - Resource catalogue and property visibility
//! └── handlers.rs    - Record CRUD
//! ```

pub mod auth;
pub mod handlers;
pub mod resources;

pub use auth::{admin_login, admin_logout};
pub use resources::{Resource, View};
