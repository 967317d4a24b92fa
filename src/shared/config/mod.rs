//! Application configuration module
//!
//! Configuration is read once at startup and handed to the server as an
//! explicit value. Nothing in the crate reads the environment after that.
//!
//! # Environment Variables
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `PORT` | listen port | `3000` |
//! | `DATABASE_URL` / `MONGO_URI` | database connection string | none |
//! | `JWT_SECRET` | HMAC secret for session tokens | required |
//! | `CORS_ORIGIN` | comma-separated allowed origins | `http://localhost:5173` |
//! | `COOKIE_SECURE` | add `Secure` to session cookies | `false` |
//! | `BCRYPT_COST` | bcrypt work factor | `12` |

use std::time::Duration;
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default allowed CORS origin (local frontend dev server)
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Session tokens and cookies live for one day
pub const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// Database connection string, required only by the server binary
    pub database_url: Option<String>,
    /// Secret used to sign session tokens
    pub jwt_secret: String,
    /// Origins allowed to make credentialed cross-origin requests
    pub cors_origins: Vec<String>,
    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Lifetime of session tokens and cookies
    pub session_ttl: Duration,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// `DATABASE_URL` takes precedence over `MONGO_URI` when both are set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(port) = lookup("PORT") {
            let port = port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
            builder = builder.port(port);
        }

        if let Some(url) = lookup("DATABASE_URL").or_else(|| lookup("MONGO_URI")) {
            builder = builder.database_url(url);
        }

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }

        if let Some(origins) = lookup("CORS_ORIGIN") {
            builder = builder.cors_origins(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }

        if let Some(secure) = lookup("COOKIE_SECURE") {
            let secure = match secure.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "COOKIE_SECURE",
                        value: secure,
                    })
                }
            };
            builder = builder.cookie_secure(secure);
        }

        if let Some(cost) = lookup("BCRYPT_COST") {
            let parsed = cost.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: cost.clone(),
            })?;
            builder = builder.bcrypt_cost(parsed);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        // bcrypt rejects costs outside 4..=31
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    cors_origins: Option<Vec<String>>,
    cookie_secure: bool,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the allowed CORS origins
    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Mark session cookies `Secure`
    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let cors_origins = match self.cors_origins {
            Some(origins) if !origins.is_empty() => origins,
            _ => vec![DEFAULT_CORS_ORIGIN.to_string()],
        };

        let config = AppConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
            jwt_secret,
            cors_origins,
            cookie_secure: self.cookie_secure,
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            session_ttl: SESSION_TTL,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
