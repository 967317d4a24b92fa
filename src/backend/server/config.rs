/**
 * Server Configuration
 *
 * This module turns an `AppConfig` into the running services the server
 * needs, focusing on the PostgreSQL store.
 *
 * # Error Handling
 *
 * Unlike optional services, the store is required: a missing database URL,
 * a failed connection or a failed migration stops startup.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::store::{PgStore, StoreError};
use crate::shared::{AppConfig, ConfigError};

/// Failure while bringing up server services
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Connect to the database and apply migrations
///
/// This function:
/// 1. Reads the database URL from the configuration
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// The connected store, or the first error encountered
pub async fn load_store(config: &AppConfig) -> Result<Arc<PgStore>, StartupError> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or(ConfigError::MissingValue("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    store.migrate().await?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(store))
}
