/**
 * Admin Route Handlers
 *
 * # Routes
 *
 * - `POST /admin/login` - Admin login, sets `adminSession` (public)
 * - `POST /admin/logout` - Clears `adminSession` (public)
 * - `GET /admin/resources` - Resource catalogue
 * - `GET|POST /admin/resources/{resource}` - List / create
 * - `GET|PATCH|DELETE /admin/resources/{resource}/{id}` - Show / update / delete
 *
 * Everything under `/admin/resources` requires an admin session.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::admin::handlers::{
    create_record, delete_record, list_records, list_resources, show_record, update_record,
};
use crate::backend::admin::{admin_login, admin_logout};
use crate::backend::middleware::admin_auth;
use crate::backend::server::state::AppState;

/// Configure admin routes
///
/// # Returns
///
/// Router to be nested under `/admin`
pub fn configure_admin_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/resources", get(list_resources))
        .route(
            "/resources/{resource}",
            get(list_records).post(create_record),
        )
        .route(
            "/resources/{resource}/{id}",
            get(show_record).patch(update_record).delete(delete_record),
        )
        .route_layer(from_fn_with_state(state, admin_auth));

    Router::new()
        .route("/login", post(admin_login))
        .route("/logout", post(admin_logout))
        .merge(protected)
}
