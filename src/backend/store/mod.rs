//! Record Store
//!
//! The store holds users, student and teacher profiles, attendance and marks.
//! Handlers only see the `Store` trait; the server binary runs on `PgStore`
//! and tests run on `MemoryStore`.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - Store trait and StoreError
//! ├── models.rs    - Row types and create/update payloads
//! ├── postgres.rs  - PostgreSQL implementation (sqlx)
//! └── memory.rs    - In-process implementation
//! ```
//!
//! # Invariants
//!
//! - User emails are unique (`StoreError::DuplicateEmail`).
//! - Student and teacher profiles reference an existing user, at most one
//!   profile of each kind per user.
//! - Attendance and marks reference a student profile id.
//! - Deleting a user removes its profiles; deleting a student removes its
//!   attendance and marks.
//! - `register_student` writes the user and the profile atomically.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use models::*;
pub use postgres::PgStore;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists
    #[error("email already registered")]
    DuplicateEmail,

    /// The referenced user already owns a profile of this kind
    #[error("user already has a {0} profile")]
    DuplicateProfile(&'static str),

    /// A referenced record does not exist
    #[error("referenced {0} does not exist")]
    MissingReference(&'static str),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations used by the handlers
///
/// `find_*`, `update_*` return `None` and `delete_*` return `false` when the
/// record does not exist.
#[async_trait]
pub trait Store: Send + Sync {
    // Users
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn list_users(&self) -> StoreResult<Vec<User>>;
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;
    async fn update_user(&self, id: Uuid, changes: UserChanges) -> StoreResult<Option<User>>;
    async fn delete_user(&self, id: Uuid) -> StoreResult<bool>;

    // Students
    /// Create a user and its student profile as one unit
    async fn register_student(
        &self,
        user: NewUser,
        student: NewStudent,
    ) -> StoreResult<(User, Student)>;
    async fn find_student(&self, id: Uuid) -> StoreResult<Option<Student>>;
    async fn find_student_by_user(&self, user_id: Uuid) -> StoreResult<Option<Student>>;
    async fn list_students(&self) -> StoreResult<Vec<Student>>;
    async fn create_student(&self, user_id: Uuid, student: NewStudent) -> StoreResult<Student>;
    async fn update_student(
        &self,
        id: Uuid,
        changes: StudentChanges,
    ) -> StoreResult<Option<Student>>;
    async fn delete_student(&self, id: Uuid) -> StoreResult<bool>;

    // Teachers
    async fn find_teacher(&self, id: Uuid) -> StoreResult<Option<Teacher>>;
    async fn list_teachers(&self) -> StoreResult<Vec<Teacher>>;
    async fn create_teacher(&self, teacher: NewTeacher) -> StoreResult<Teacher>;
    async fn update_teacher(
        &self,
        id: Uuid,
        changes: TeacherChanges,
    ) -> StoreResult<Option<Teacher>>;
    async fn delete_teacher(&self, id: Uuid) -> StoreResult<bool>;

    // Attendance
    async fn find_attendance(&self, id: Uuid) -> StoreResult<Option<Attendance>>;
    async fn list_attendance(&self) -> StoreResult<Vec<Attendance>>;
    async fn attendance_for_student(&self, student_id: Uuid) -> StoreResult<Vec<Attendance>>;
    async fn record_attendance(&self, attendance: NewAttendance) -> StoreResult<Attendance>;
    async fn update_attendance(
        &self,
        id: Uuid,
        changes: AttendanceChanges,
    ) -> StoreResult<Option<Attendance>>;
    async fn delete_attendance(&self, id: Uuid) -> StoreResult<bool>;

    // Marks
    async fn find_marks(&self, id: Uuid) -> StoreResult<Option<Marks>>;
    async fn list_marks(&self) -> StoreResult<Vec<Marks>>;
    async fn marks_for_student(&self, student_id: Uuid) -> StoreResult<Vec<Marks>>;
    async fn record_marks(&self, marks: NewMarks) -> StoreResult<Marks>;
    async fn update_marks(&self, id: Uuid, changes: MarksChanges) -> StoreResult<Option<Marks>>;
    async fn delete_marks(&self, id: Uuid) -> StoreResult<bool>;
}
