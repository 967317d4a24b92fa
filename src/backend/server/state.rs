/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The record store behind the `Store` trait
 * - The immutable application configuration
 * - The session token keys derived from `JWT_SECRET`
 *
 * # Thread Safety
 *
 * Every field is behind an `Arc` (or is cheap to clone), so `AppState` is
 * cloned per request. Mutable state lives in the store.
 *
 * # Example
 *
 * ```rust,no_run
 * use edudesk::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let users = state.store.list_users().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::store::Store;
use crate::shared::AppConfig;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `store` - Record store (`PgStore` in the server, `MemoryStore` in tests)
/// * `config` - Configuration loaded at startup
/// * `sessions` - Token signing and verification keys
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
    pub sessions: SessionKeys,
}

impl AppState {
    /// Build state from a validated configuration and a store
    pub fn new(config: AppConfig, store: Arc<dyn Store>) -> Self {
        let sessions = SessionKeys::from_config(&config);
        Self {
            store,
            config: Arc::new(config),
            sessions,
        }
    }
}

/// Implement FromRef for the store
///
/// This allows handlers to take `State<Arc<dyn Store>>` directly.
impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Implement FromRef for the configuration
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
