/**
 * Login Handler
 *
 * This module implements the student authentication handler for
 * POST /student/login, plus the credential check and cookie issuing shared
 * with the admin login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Check the role expected by the login path
 * 3. Verify password using bcrypt
 * 4. Sign a JWT carrying {userId, role}
 * 5. Set it as an `HttpOnly` cookie and return the user id
 *
 * # Security
 *
 * - Unknown email, wrong role and wrong password all return the same
 *   401 "Invalid credentials"
 * - Passwords are never logged or returned in responses
 */
use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::backend::auth::cookies::{session_cookie, STUDENT_COOKIE};
use crate::backend::auth::handlers::types::{LoginData, LoginRequest};
use crate::backend::auth::passwords::verify_password;
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;
use crate::backend::store::{Role, Store, User};
use crate::shared::ApiResponse;

/// Check an email/password pair for a user of the given role
///
/// # Arguments
/// * `store` - Record store
/// * `email` - Submitted email
/// * `password` - Submitted plaintext password
/// * `role` - Role the login path requires
///
/// # Returns
/// The matching user, or `InvalidCredentials`
pub async fn authenticate(
    store: &dyn Store,
    email: &str,
    password: &str,
    role: Role,
) -> Result<User, BackendError> {
    let user = store
        .find_user_by_email(email)
        .await?
        .filter(|user| user.role == role)
        .ok_or_else(|| {
            tracing::warn!("Login rejected for {}: no {} account", email, role);
            BackendError::InvalidCredentials
        })?;

    if !verify_password(password, &user.password_hash)? {
        tracing::warn!("Login rejected for {}: wrong password", email);
        return Err(BackendError::InvalidCredentials);
    }

    Ok(user)
}

/// Sign a session token for `user` and wrap it in a `Set-Cookie` header
pub fn session_headers(
    state: &AppState,
    cookie_name: &str,
    user: &User,
) -> Result<HeaderMap, BackendError> {
    let token = state.sessions.issue(user.id, user.role)?;
    let cookie = session_cookie(
        cookie_name,
        &token,
        state.sessions.ttl(),
        state.config.cookie_secure,
    )?;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    Ok(headers)
}

/// Student login handler
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown email, non-student account or wrong password
/// * `500 Internal Server Error` - Store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /student/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "asha@example.com", "password": "secret123" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "statusCode": 200,
///   "data": { "userId": "123e4567-e89b-12d3-a456-426614174000" },
///   "message": "Login successful",
///   "success": true
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Response, BackendError> {
    let user = authenticate(
        state.store.as_ref(),
        &request.email,
        &request.password,
        Role::Student,
    )
    .await?;

    let headers = session_headers(&state, STUDENT_COOKIE, &user)?;
    tracing::info!("Student logged in: {}", user.email);

    let body = ApiResponse::new(
        StatusCode::OK.as_u16(),
        LoginData { user_id: user.id },
        "Login successful",
    );
    Ok((headers, body).into_response())
}
