//! Student Endpoints
//!
//! Registration and the dashboard aggregator.
//!
//! # Module Structure
//!
//! ```text
//! students/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Request and response types
//! ├── register.rs   - POST /student/register
//! ├── dashboard.rs  - GET /student/dashboard
//! └── stats.rs      - Attendance percentage and marks totals
//! ```

pub mod dashboard;
pub mod register;
pub mod stats;
pub mod types;

pub use dashboard::get_dashboard;
pub use register::register_student;
pub use types::{DashboardResponse, RegisterStudentRequest, Registration, StudentProfile};
