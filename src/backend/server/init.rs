/**
 * Server Initialization
 *
 * This module builds the Axum application from a ready `AppState`.
 *
 * # Initialization Process
 *
 * 1. The binary loads `AppConfig` and connects the store (`config.rs`)
 * 2. `AppState::new` derives session keys from the configuration
 * 3. `create_app` configures routes and middleware
 *
 * Tests call `create_app` directly with a `MemoryStore`.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(state: AppState) -> Router {
    tracing::info!(
        "Initializing EduDesk backend (CORS origins: {})",
        state.config.cors_origins.join(", ")
    );
    create_router(state)
}
