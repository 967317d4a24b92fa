/**
 * Admin Login and Logout
 *
 * The admin surface authenticates separately from students: its own cookie
 * (`adminSession`) and the `admin` role.
 */
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::cookies::ADMIN_COOKIE;
use crate::backend::auth::handlers::{
    authenticate, cleared_session_headers, session_headers, LoginData, LoginRequest,
    LogoutResponse,
};
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;
use crate::backend::store::Role;
use crate::shared::ApiResponse;

/// POST /admin/login
///
/// # Errors
///
/// * `401 Unauthorized` - No admin with this email, or wrong password
pub async fn admin_login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Response, BackendError> {
    let user = authenticate(
        state.store.as_ref(),
        &request.email,
        &request.password,
        Role::Admin,
    )
    .await?;

    let headers = session_headers(&state, ADMIN_COOKIE, &user)?;
    tracing::info!("Admin logged in: {}", user.email);

    let body = ApiResponse::new(
        StatusCode::OK.as_u16(),
        LoginData { user_id: user.id },
        "Login successful",
    );
    Ok((headers, body).into_response())
}

/// POST /admin/logout, always 200
pub async fn admin_logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        cleared_session_headers(&state, ADMIN_COOKIE),
        Json(LogoutResponse::default()),
    )
}
