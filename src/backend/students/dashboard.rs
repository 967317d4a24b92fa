/**
 * Dashboard Handler
 *
 * GET /student/dashboard, behind `student_auth`.
 *
 * Loads the signed-in student's profile with its user, then summarises the
 * attendance and marks recorded against that profile.
 */
use axum::{extract::State, http::StatusCode};

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::students::stats::{marks_totals, AttendancePercentage};
use crate::backend::students::types::{DashboardResponse, StudentProfile};
use crate::shared::ApiResponse;

/// Build the dashboard for the authenticated student
///
/// # Errors
///
/// * `404 Not Found` - The user has no student profile
pub async fn get_dashboard(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<ApiResponse<DashboardResponse>, BackendError> {
    let student = state
        .store
        .find_student_by_user(identity.id)
        .await?
        .ok_or(BackendError::ProfileNotFound)?;

    // Deleted between the session check and here
    let user = state
        .store
        .find_user(student.user_id)
        .await?
        .ok_or(BackendError::ProfileNotFound)?;

    let attendance = state.store.attendance_for_student(student.id).await?;
    let marks = state.store.marks_for_student(student.id).await?;
    let (total_marks_obtained, total_max_marks) = marks_totals(&marks);

    let dashboard = DashboardResponse {
        profile: StudentProfile { student, user },
        attendance_percentage: AttendancePercentage::from_records(&attendance),
        total_marks_obtained,
        total_max_marks,
    };

    Ok(ApiResponse::new(
        StatusCode::OK.as_u16(),
        dashboard,
        "Dashboard fetched",
    ))
}
