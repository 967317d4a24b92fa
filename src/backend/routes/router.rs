/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * Applied to every route, outermost first:
 * 1. `TraceLayer` - request spans
 * 2. `CorsLayer` - configured origins with credentials
 * 3. `DefaultBodyLimit` - 16 KiB request bodies
 */

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::admin_routes::configure_admin_routes;
use crate::backend::routes::student_routes::configure_student_routes;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Maximum accepted request body
pub const BODY_LIMIT: usize = 16 * 1024;

/// Build the CORS layer from the configured origins
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

async fn health() -> &'static str {
    "Server Running"
}

/// Fallback for unmatched paths, rendered in the error envelope
async fn route_not_found() -> BackendError {
    BackendError::not_found("Route")
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (store, config, session keys)
///
/// # Route Details
///
/// - `GET /` - Health check
/// - `/student/*` - See `student_routes`
/// - `/admin/*` - See `admin_routes`
/// - anything else - 404 "Route not found"
pub fn create_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .route("/", get(health))
        .nest("/student", configure_student_routes(app_state.clone()))
        .nest("/admin", configure_admin_routes(app_state.clone()))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_skips_invalid_origin() {
        let config = AppConfig::builder()
            .jwt_secret("secret")
            .cors_origins(vec![
                "http://localhost:5173".to_string(),
                "bad\norigin".to_string(),
            ])
            .build()
            .unwrap();
        // Building must not panic on the invalid entry
        let _ = cors_layer(&config);
    }

    #[tokio::test]
    async fn test_fallback_is_not_found() {
        let err = route_not_found().await;
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Route not found");
    }
}
