//! Server Module
//!
//! This module contains the code for initializing and configuring the Axum
//! HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Store connection and migrations at startup
//! - **`init`** - App creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Startup services (database)
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env`
//! 2. **Store Connection**: connect PostgreSQL and run migrations
//! 3. **State Creation**: `AppState::new(config, store)`
//! 4. **Router Creation**: configure all routes and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use edudesk::backend::server::{config::load_store, create_app, AppState};
//! use edudesk::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let store = load_store(&config).await?;
//! let app = create_app(AppState::new(config, store));
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{load_store, StartupError};
pub use init::create_app;
pub use state::AppState;
