/**
 * EduDesk Server Entry Point
 *
 * This is the main entry point for the EduDesk backend server.
 * It loads configuration, connects the PostgreSQL store, runs migrations
 * and serves the Axum application.
 */

use edudesk::backend::server::{create_app, load_store, AppState};
use edudesk::shared::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing, INFO unless RUST_LOG says otherwise
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("Server initialization started");

    let config = AppConfig::from_env()?;
    let store = load_store(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_app(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on port {}", addr.port());
    axum::serve(listener, app).await?;

    Ok(())
}
