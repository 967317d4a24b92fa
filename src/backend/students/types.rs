/**
 * Student Handler Types
 *
 * Request and response types for the student registration and dashboard
 * endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::store::{NewStudent, Student, User};
use crate::backend::students::stats::AttendancePercentage;

/// Registration request
///
/// Account fields plus the student profile fields in one flat object.
/// Required fields are optional here so a missing key and a blank value
/// are reported the same way by `validate`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Plaintext, hashed before storage
    pub password: Option<String>,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub roll_number: Option<String>,
    pub parent_name: Option<String>,
    pub contact_number: Option<String>,
}

/// Registration with every required field present
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile: NewStudent,
}

fn required(field: &str, value: Option<String>) -> Result<String, BackendError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(BackendError::validation(format!("{field} is required"))),
    }
}

impl RegisterStudentRequest {
    /// Reject missing or blank required fields
    ///
    /// Fields are checked in request order; the first failure is reported.
    pub fn validate(self) -> Result<Registration, BackendError> {
        let name = required("name", self.name)?;
        let email = required("email", self.email)?;
        let password = required("password", self.password)?;
        let class_name = required("className", self.class_name)?;
        let roll_number = required("rollNumber", self.roll_number)?;

        Ok(Registration {
            name,
            email,
            password,
            profile: NewStudent {
                class_name,
                section: self.section,
                roll_number,
                parent_name: self.parent_name,
                contact_number: self.contact_number,
            },
        })
    }
}

/// Student profile with its user expanded (password omitted)
#[derive(Serialize, Debug, Clone)]
pub struct StudentProfile {
    #[serde(flatten)]
    pub student: Student,
    pub user: User,
}

/// Dashboard payload
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub profile: StudentProfile,
    pub attendance_percentage: AttendancePercentage,
    pub total_marks_obtained: i64,
    pub total_max_marks: i64,
}
