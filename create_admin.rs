/**
 * Admin Seeding Tool
 *
 * Creates an admin account in the configured database.
 *
 * Defaults to "Super Admin" / admin@gmail.com / admin123; override with
 * `ADMIN_NAME`, `ADMIN_EMAIL` and `ADMIN_PASSWORD`.
 *
 * Run with: cargo run --bin create-admin
 */

use edudesk::backend::auth::passwords::hash_password;
use edudesk::backend::server::load_store;
use edudesk::backend::store::{NewUser, Role, Store, StoreError};
use edudesk::shared::AppConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_NAME: &str = "Super Admin";
const DEFAULT_EMAIL: &str = "admin@gmail.com";
const DEFAULT_PASSWORD: &str = "admin123";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    let store = load_store(&config).await?;

    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| DEFAULT_NAME.to_string());
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_EMAIL.to_string());
    let password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());

    let admin = NewUser {
        name,
        email: email.clone(),
        password_hash: hash_password(&password, config.bcrypt_cost)?,
        role: Role::Admin,
    };

    match store.create_user(admin).await {
        Ok(user) => {
            tracing::info!("Admin created: {} ({})", user.email, user.id);
            Ok(())
        }
        Err(StoreError::DuplicateEmail) => {
            tracing::error!("A user with email {} already exists", email);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
