/**
 * Logout Handler
 *
 * POST /student/logout. Logout never fails: the cookie is cleared whether
 * or not the request carried one.
 */
use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::IntoResponse,
    Json,
};

use crate::backend::auth::cookies::{clear_cookie, STUDENT_COOKIE};
use crate::backend::auth::handlers::types::LogoutResponse;
use crate::backend::server::state::AppState;

/// Headers that expire the named session cookie
pub fn cleared_session_headers(state: &AppState, cookie_name: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    match clear_cookie(cookie_name, state.config.cookie_secure) {
        Ok(cookie) => {
            headers.insert(SET_COOKIE, cookie);
        }
        Err(e) => tracing::error!("Failed to build cleared {} cookie: {}", cookie_name, e),
    }
    headers
}

/// Student logout handler
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        cleared_session_headers(&state, STUDENT_COOKIE),
        Json(LogoutResponse::default()),
    )
}
