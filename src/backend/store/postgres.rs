/**
 * PostgreSQL Store
 *
 * `Store` implementation over a `sqlx::PgPool`. Queries use the runtime
 * `query_as` API so the crate builds without a live database.
 *
 * Constraint violations are translated into `StoreError` variants by
 * constraint name (see `migrations/`):
 * - `users_email_unique` → `DuplicateEmail`
 * - `students_user_unique` / `teachers_user_unique` → `DuplicateProfile`
 * - any other unique violation → `Database`
 * - any foreign key violation → `MissingReference`
 *
 * Partial updates use `COALESCE($n, column)` so `None` keeps the stored value.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::*;
use super::{Store, StoreError, StoreResult};

const USER_COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";
const STUDENT_COLUMNS: &str = "id, user_id, class_name, section, roll_number, parent_name, \
     contact_number, created_at, updated_at";
const TEACHER_COLUMNS: &str = "id, user_id, subject, qualification, experience_years, salary, \
     created_at, updated_at";
const ATTENDANCE_COLUMNS: &str = "id, student_id, date, status";
const MARKS_COLUMNS: &str = "id, student_id, marks_obtained, total_marks";

/// Translate a sqlx error into a store error
///
/// # Arguments
/// * `err` - Error returned by sqlx
/// * `reference` - Name of the record a foreign key points at
fn map_db_error(err: sqlx::Error, reference: &'static str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some("users_email_unique") => return StoreError::DuplicateEmail,
                Some("students_user_unique") => return StoreError::DuplicateProfile("student"),
                Some("teachers_user_unique") => return StoreError::DuplicateProfile("teacher"),
                _ => {}
            }
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::MissingReference(reference);
        }
    }
    StoreError::Database(err)
}

/// PostgreSQL-backed record store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    ///
    /// # Returns
    /// Connected store or the connection error
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn delete_from(&self, table: &str, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let now = Utc::now();
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "user"))
    }

    async fn update_user(&self, id: Uuid, changes: UserChanges) -> StoreResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                role = COALESCE($5, role),
                updated_at = $6
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.password_hash)
        .bind(changes.role.map(|r| r.as_str()))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "user"))
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<bool> {
        self.delete_from("users", id).await
    }

    /// Insert the user and its student profile in one transaction
    async fn register_student(
        &self,
        user: NewUser,
        student: NewStudent,
    ) -> StoreResult<(User, Student)> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "user"))?;

        let student = sqlx::query_as::<_, Student>(&format!(
            r#"
            INSERT INTO students
                (id, user_id, class_name, section, roll_number, parent_name, contact_number,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(user.id)
        .bind(&student.class_name)
        .bind(&student.section)
        .bind(&student.roll_number)
        .bind(&student.parent_name)
        .bind(&student.contact_number)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "user"))?;

        tx.commit().await?;
        Ok((user, student))
    }

    async fn find_student(&self, id: Uuid) -> StoreResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }

    async fn find_student_by_user(&self, user_id: Uuid) -> StoreResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }

    async fn list_students(&self) -> StoreResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(students)
    }

    async fn create_student(&self, user_id: Uuid, student: NewStudent) -> StoreResult<Student> {
        let now = Utc::now();
        sqlx::query_as::<_, Student>(&format!(
            r#"
            INSERT INTO students
                (id, user_id, class_name, section, roll_number, parent_name, contact_number,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&student.class_name)
        .bind(&student.section)
        .bind(&student.roll_number)
        .bind(&student.parent_name)
        .bind(&student.contact_number)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "user"))
    }

    async fn update_student(
        &self,
        id: Uuid,
        changes: StudentChanges,
    ) -> StoreResult<Option<Student>> {
        sqlx::query_as::<_, Student>(&format!(
            r#"
            UPDATE students SET
                class_name = COALESCE($2, class_name),
                section = COALESCE($3, section),
                roll_number = COALESCE($4, roll_number),
                parent_name = COALESCE($5, parent_name),
                contact_number = COALESCE($6, contact_number),
                updated_at = $7
            WHERE id = $1
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(changes.class_name)
        .bind(changes.section)
        .bind(changes.roll_number)
        .bind(changes.parent_name)
        .bind(changes.contact_number)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "user"))
    }

    async fn delete_student(&self, id: Uuid) -> StoreResult<bool> {
        self.delete_from("students", id).await
    }

    async fn find_teacher(&self, id: Uuid) -> StoreResult<Option<Teacher>> {
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(teacher)
    }

    async fn list_teachers(&self) -> StoreResult<Vec<Teacher>> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(teachers)
    }

    async fn create_teacher(&self, teacher: NewTeacher) -> StoreResult<Teacher> {
        let now = Utc::now();
        sqlx::query_as::<_, Teacher>(&format!(
            r#"
            INSERT INTO teachers
                (id, user_id, subject, qualification, experience_years, salary,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING {TEACHER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(teacher.user_id)
        .bind(&teacher.subject)
        .bind(&teacher.qualification)
        .bind(teacher.experience_years)
        .bind(teacher.salary)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "user"))
    }

    async fn update_teacher(
        &self,
        id: Uuid,
        changes: TeacherChanges,
    ) -> StoreResult<Option<Teacher>> {
        sqlx::query_as::<_, Teacher>(&format!(
            r#"
            UPDATE teachers SET
                subject = COALESCE($2, subject),
                qualification = COALESCE($3, qualification),
                experience_years = COALESCE($4, experience_years),
                salary = COALESCE($5, salary),
                updated_at = $6
            WHERE id = $1
            RETURNING {TEACHER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(changes.subject)
        .bind(changes.qualification)
        .bind(changes.experience_years)
        .bind(changes.salary)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "user"))
    }

    async fn delete_teacher(&self, id: Uuid) -> StoreResult<bool> {
        self.delete_from("teachers", id).await
    }

    async fn find_attendance(&self, id: Uuid) -> StoreResult<Option<Attendance>> {
        let record = sqlx::query_as::<_, Attendance>(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_attendance(&self) -> StoreResult<Vec<Attendance>> {
        let records = sqlx::query_as::<_, Attendance>(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance ORDER BY date, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn attendance_for_student(&self, student_id: Uuid) -> StoreResult<Vec<Attendance>> {
        let records = sqlx::query_as::<_, Attendance>(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE student_id = $1 ORDER BY date, id"
        ))
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn record_attendance(&self, attendance: NewAttendance) -> StoreResult<Attendance> {
        sqlx::query_as::<_, Attendance>(&format!(
            r#"
            INSERT INTO attendance (id, student_id, date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING {ATTENDANCE_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(attendance.student_id)
        .bind(attendance.date.unwrap_or_else(Utc::now))
        .bind(attendance.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "student"))
    }

    async fn update_attendance(
        &self,
        id: Uuid,
        changes: AttendanceChanges,
    ) -> StoreResult<Option<Attendance>> {
        sqlx::query_as::<_, Attendance>(&format!(
            r#"
            UPDATE attendance SET
                date = COALESCE($2, date),
                status = COALESCE($3, status)
            WHERE id = $1
            RETURNING {ATTENDANCE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(changes.date)
        .bind(changes.status.map(|s| s.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "student"))
    }

    async fn delete_attendance(&self, id: Uuid) -> StoreResult<bool> {
        self.delete_from("attendance", id).await
    }

    async fn find_marks(&self, id: Uuid) -> StoreResult<Option<Marks>> {
        let record = sqlx::query_as::<_, Marks>(&format!(
            "SELECT {MARKS_COLUMNS} FROM marks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_marks(&self) -> StoreResult<Vec<Marks>> {
        let records = sqlx::query_as::<_, Marks>(&format!(
            "SELECT {MARKS_COLUMNS} FROM marks ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn marks_for_student(&self, student_id: Uuid) -> StoreResult<Vec<Marks>> {
        let records = sqlx::query_as::<_, Marks>(&format!(
            "SELECT {MARKS_COLUMNS} FROM marks WHERE student_id = $1 ORDER BY id"
        ))
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn record_marks(&self, marks: NewMarks) -> StoreResult<Marks> {
        sqlx::query_as::<_, Marks>(&format!(
            r#"
            INSERT INTO marks (id, student_id, marks_obtained, total_marks)
            VALUES ($1, $2, $3, $4)
            RETURNING {MARKS_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(marks.student_id)
        .bind(marks.marks_obtained)
        .bind(marks.total_marks)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "student"))
    }

    async fn update_marks(&self, id: Uuid, changes: MarksChanges) -> StoreResult<Option<Marks>> {
        sqlx::query_as::<_, Marks>(&format!(
            r#"
            UPDATE marks SET
                marks_obtained = COALESCE($2, marks_obtained),
                total_marks = COALESCE($3, total_marks)
            WHERE id = $1
            RETURNING {MARKS_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(changes.marks_obtained)
        .bind(changes.total_marks)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "student"))
    }

    async fn delete_marks(&self, id: Uuid) -> StoreResult<bool> {
        self.delete_from("marks", id).await
    }
}
