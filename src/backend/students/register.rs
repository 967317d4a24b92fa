/**
 * Registration Handler
 *
 * POST /student/register
 *
 * # Registration Process
 *
 * 1. Validate required fields
 * 2. Reject an email that is already registered
 * 3. Hash the password
 * 4. Create the user (role `student`) and its profile in one store call
 *
 * The early email check gives the common case a clean 400; the store's own
 * uniqueness check covers concurrent registrations.
 */
use axum::{extract::State, http::StatusCode};

use crate::backend::auth::passwords::hash_password;
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;
use crate::backend::store::{NewUser, Role, Student};
use crate::backend::students::types::RegisterStudentRequest;
use crate::shared::ApiResponse;

/// Register a student account and profile
///
/// # Errors
///
/// * `400 Bad Request` - Missing or blank required field, malformed body or
///   email already registered
/// * `500 Internal Server Error` - Store or hashing failure
pub async fn register_student(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterStudentRequest>,
) -> Result<ApiResponse<Student>, BackendError> {
    let registration = request.validate()?;

    if state
        .store
        .find_user_by_email(&registration.email)
        .await?
        .is_some()
    {
        tracing::warn!("Registration rejected, email in use: {}", registration.email);
        return Err(BackendError::DuplicateEmail);
    }

    let password_hash = hash_password(&registration.password, state.config.bcrypt_cost)?;
    let user = NewUser {
        name: registration.name,
        email: registration.email,
        password_hash,
        role: Role::Student,
    };

    let (user, student) = state
        .store
        .register_student(user, registration.profile)
        .await?;
    tracing::info!("Registered student {} ({})", user.email, student.id);

    Ok(ApiResponse::new(
        StatusCode::CREATED.as_u16(),
        student,
        "Student registered successfully",
    ))
}
