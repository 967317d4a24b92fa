/**
 * Student Route Handlers
 *
 * # Routes
 *
 * - `POST /student/register` - Registration (public)
 * - `POST /student/login` - Login, sets `studentToken` (public)
 * - `POST /student/logout` - Logout, clears `studentToken` (public)
 * - `GET /student/dashboard` - Dashboard (requires a student session)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout};
use crate::backend::middleware::student_auth;
use crate::backend::server::state::AppState;
use crate::backend::students::{get_dashboard, register_student};

/// Configure student routes
///
/// # Arguments
///
/// * `state` - Application state, needed by the session middleware
///
/// # Returns
///
/// Router to be nested under `/student`
pub fn configure_student_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/dashboard", get(get_dashboard))
        .route_layer(from_fn_with_state(state, student_auth));

    Router::new()
        .route("/register", post(register_student))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .merge(protected)
}
