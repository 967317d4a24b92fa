/**
 * In-Memory Store
 *
 * `Store` implementation backed by plain vectors behind a single
 * `tokio::sync::RwLock`. Records are kept in insertion order so listings
 * match the PostgreSQL implementation (ordered by creation).
 *
 * Every mutating operation takes the write lock once, which makes
 * `register_student` and the cascading deletes atomic.
 */

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::*;
use super::{Store, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    attendance: Vec<Attendance>,
    marks: Vec<Marks>,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn user_exists(&self, id: Uuid) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    fn student_exists(&self, id: Uuid) -> bool {
        self.students.iter().any(|s| s.id == id)
    }

    fn insert_user(&mut self, new: NewUser) -> StoreResult<User> {
        if self.email_taken(&new.email, None) {
            return Err(StoreError::DuplicateEmail);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
            created_at: now,
            updated_at: now,
        };
        self.users.push(user.clone());
        Ok(user)
    }

    fn insert_student(&mut self, user_id: Uuid, new: NewStudent) -> StoreResult<Student> {
        if !self.user_exists(user_id) {
            return Err(StoreError::MissingReference("user"));
        }
        if self.students.iter().any(|s| s.user_id == user_id) {
            return Err(StoreError::DuplicateProfile("student"));
        }
        let now = Utc::now();
        let student = Student {
            id: Uuid::new_v4(),
            user_id,
            class_name: new.class_name,
            section: new.section,
            roll_number: new.roll_number,
            parent_name: new.parent_name,
            contact_number: new.contact_number,
            created_at: now,
            updated_at: now,
        };
        self.students.push(student.clone());
        Ok(student)
    }

    fn remove_student(&mut self, id: Uuid) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        if self.students.len() == before {
            return false;
        }
        self.attendance.retain(|a| a.student_id != id);
        self.marks.retain(|m| m.student_id != id);
        true
    }
}

/// In-process record store
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        self.tables.write().await.insert_user(user)
    }

    async fn update_user(&self, id: Uuid, changes: UserChanges) -> StoreResult<Option<User>> {
        let mut tables = self.tables.write().await;
        if let Some(email) = &changes.email {
            if tables.email_taken(email, Some(id)) {
                return Err(StoreError::DuplicateEmail);
            }
        }
        let Some(user) = tables.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(hash) = changes.password_hash {
            user.password_hash = hash;
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        if tables.users.len() == before {
            return Ok(false);
        }
        let owned: Vec<Uuid> = tables
            .students
            .iter()
            .filter(|s| s.user_id == id)
            .map(|s| s.id)
            .collect();
        for student_id in owned {
            tables.remove_student(student_id);
        }
        tables.teachers.retain(|t| t.user_id != id);
        Ok(true)
    }

    async fn register_student(
        &self,
        user: NewUser,
        student: NewStudent,
    ) -> StoreResult<(User, Student)> {
        let mut tables = self.tables.write().await;
        let user = tables.insert_user(user)?;
        match tables.insert_student(user.id, student) {
            Ok(student) => Ok((user, student)),
            Err(err) => {
                // Keep the pair atomic
                tables.users.retain(|u| u.id != user.id);
                Err(err)
            }
        }
    }

    async fn find_student(&self, id: Uuid) -> StoreResult<Option<Student>> {
        let tables = self.tables.read().await;
        Ok(tables.students.iter().find(|s| s.id == id).cloned())
    }

    async fn find_student_by_user(&self, user_id: Uuid) -> StoreResult<Option<Student>> {
        let tables = self.tables.read().await;
        Ok(tables.students.iter().find(|s| s.user_id == user_id).cloned())
    }

    async fn list_students(&self) -> StoreResult<Vec<Student>> {
        Ok(self.tables.read().await.students.clone())
    }

    async fn create_student(&self, user_id: Uuid, student: NewStudent) -> StoreResult<Student> {
        self.tables.write().await.insert_student(user_id, student)
    }

    async fn update_student(
        &self,
        id: Uuid,
        changes: StudentChanges,
    ) -> StoreResult<Option<Student>> {
        let mut tables = self.tables.write().await;
        let Some(student) = tables.students.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(class_name) = changes.class_name {
            student.class_name = class_name;
        }
        if changes.section.is_some() {
            student.section = changes.section;
        }
        if let Some(roll_number) = changes.roll_number {
            student.roll_number = roll_number;
        }
        if changes.parent_name.is_some() {
            student.parent_name = changes.parent_name;
        }
        if changes.contact_number.is_some() {
            student.contact_number = changes.contact_number;
        }
        student.updated_at = Utc::now();
        Ok(Some(student.clone()))
    }

    async fn delete_student(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.tables.write().await.remove_student(id))
    }

    async fn find_teacher(&self, id: Uuid) -> StoreResult<Option<Teacher>> {
        let tables = self.tables.read().await;
        Ok(tables.teachers.iter().find(|t| t.id == id).cloned())
    }

    async fn list_teachers(&self) -> StoreResult<Vec<Teacher>> {
        Ok(self.tables.read().await.teachers.clone())
    }

    async fn create_teacher(&self, teacher: NewTeacher) -> StoreResult<Teacher> {
        let mut tables = self.tables.write().await;
        if !tables.user_exists(teacher.user_id) {
            return Err(StoreError::MissingReference("user"));
        }
        if tables.teachers.iter().any(|t| t.user_id == teacher.user_id) {
            return Err(StoreError::DuplicateProfile("teacher"));
        }
        let now = Utc::now();
        let teacher = Teacher {
            id: Uuid::new_v4(),
            user_id: teacher.user_id,
            subject: teacher.subject,
            qualification: teacher.qualification,
            experience_years: teacher.experience_years,
            salary: teacher.salary,
            created_at: now,
            updated_at: now,
        };
        tables.teachers.push(teacher.clone());
        Ok(teacher)
    }

    async fn update_teacher(
        &self,
        id: Uuid,
        changes: TeacherChanges,
    ) -> StoreResult<Option<Teacher>> {
        let mut tables = self.tables.write().await;
        let Some(teacher) = tables.teachers.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(subject) = changes.subject {
            teacher.subject = subject;
        }
        if changes.qualification.is_some() {
            teacher.qualification = changes.qualification;
        }
        if changes.experience_years.is_some() {
            teacher.experience_years = changes.experience_years;
        }
        if changes.salary.is_some() {
            teacher.salary = changes.salary;
        }
        teacher.updated_at = Utc::now();
        Ok(Some(teacher.clone()))
    }

    async fn delete_teacher(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.teachers.len();
        tables.teachers.retain(|t| t.id != id);
        Ok(tables.teachers.len() != before)
    }

    async fn find_attendance(&self, id: Uuid) -> StoreResult<Option<Attendance>> {
        let tables = self.tables.read().await;
        Ok(tables.attendance.iter().find(|a| a.id == id).cloned())
    }

    async fn list_attendance(&self) -> StoreResult<Vec<Attendance>> {
        Ok(self.tables.read().await.attendance.clone())
    }

    async fn attendance_for_student(&self, student_id: Uuid) -> StoreResult<Vec<Attendance>> {
        let tables = self.tables.read().await;
        Ok(tables
            .attendance
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn record_attendance(&self, attendance: NewAttendance) -> StoreResult<Attendance> {
        let mut tables = self.tables.write().await;
        if !tables.student_exists(attendance.student_id) {
            return Err(StoreError::MissingReference("student"));
        }
        let record = Attendance {
            id: Uuid::new_v4(),
            student_id: attendance.student_id,
            date: attendance.date.unwrap_or_else(Utc::now),
            status: attendance.status,
        };
        tables.attendance.push(record.clone());
        Ok(record)
    }

    async fn update_attendance(
        &self,
        id: Uuid,
        changes: AttendanceChanges,
    ) -> StoreResult<Option<Attendance>> {
        let mut tables = self.tables.write().await;
        let Some(record) = tables.attendance.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(date) = changes.date {
            record.date = date;
        }
        if let Some(status) = changes.status {
            record.status = status;
        }
        Ok(Some(record.clone()))
    }

    async fn delete_attendance(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.attendance.len();
        tables.attendance.retain(|a| a.id != id);
        Ok(tables.attendance.len() != before)
    }

    async fn find_marks(&self, id: Uuid) -> StoreResult<Option<Marks>> {
        let tables = self.tables.read().await;
        Ok(tables.marks.iter().find(|m| m.id == id).cloned())
    }

    async fn list_marks(&self) -> StoreResult<Vec<Marks>> {
        Ok(self.tables.read().await.marks.clone())
    }

    async fn marks_for_student(&self, student_id: Uuid) -> StoreResult<Vec<Marks>> {
        let tables = self.tables.read().await;
        Ok(tables
            .marks
            .iter()
            .filter(|m| m.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn record_marks(&self, marks: NewMarks) -> StoreResult<Marks> {
        let mut tables = self.tables.write().await;
        if !tables.student_exists(marks.student_id) {
            return Err(StoreError::MissingReference("student"));
        }
        let record = Marks {
            id: Uuid::new_v4(),
            student_id: marks.student_id,
            marks_obtained: marks.marks_obtained,
            total_marks: marks.total_marks,
        };
        tables.marks.push(record.clone());
        Ok(record)
    }

    async fn update_marks(&self, id: Uuid, changes: MarksChanges) -> StoreResult<Option<Marks>> {
        let mut tables = self.tables.write().await;
        let Some(record) = tables.marks.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        if let Some(obtained) = changes.marks_obtained {
            record.marks_obtained = obtained;
        }
        if let Some(total) = changes.total_marks {
            record.total_marks = total;
        }
        Ok(Some(record.clone()))
    }

    async fn delete_marks(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.marks.len();
        tables.marks.retain(|m| m.id != id);
        Ok(tables.marks.len() != before)
    }
}
