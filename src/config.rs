//! Configuration system
//! Loads all settings from environment variables, wrapping sensitive
//! values in `Secret` so they never end up in logs.

use config::{Config, ConfigError, Environment};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Default session token lifetime in seconds (100 hours).
/// Development placeholder; reduce before production use.
pub const DEFAULT_TOKEN_EXP_SECS: u64 = 360_000;

/// Default Argon2 iteration count (t_cost). Moderate, interactive-safe.
pub const DEFAULT_HASH_COST: u32 = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address, e.g. "0.0.0.0:3000"
    pub addr: String,
    /// Graceful shutdown timeout (seconds)
    pub graceful_shutdown_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL (Secret-wrapped to keep it out of logs)
    pub url: Secret<String>,
    /// Maximum pool connections
    pub max_connections: u32,
    /// Minimum pool connections
    pub min_connections: u32,
    /// Connection acquire timeout (seconds)
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: json, pretty
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Token signing secret. No default: startup fails if unset.
    pub jwt_secret: Secret<String>,
    /// Session token lifetime (seconds)
    pub token_exp_secs: u64,
    /// Argon2 iteration count for password hashing
    pub hash_cost: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables (prefix `PROFILE_`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Config::builder();

        settings = settings
            .set_default("server.addr", "0.0.0.0:3000")?
            .set_default("server.graceful_shutdown_timeout_secs", 30)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            // security.jwt_secret deliberately has no default
            .set_default("security.token_exp_secs", DEFAULT_TOKEN_EXP_SECS as i64)?
            .set_default("security.hash_cost", DEFAULT_HASH_COST as i64)?;

        settings = settings.add_source(
            Environment::with_prefix("PROFILE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = settings.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.jwt_secret.expose_secret().len() < 32 {
            return Err(ConfigError::Message(
                "security.jwt_secret must be at least 32 characters".to_string(),
            ));
        }

        if self.security.hash_cost == 0 {
            return Err(ConfigError::Message(
                "security.hash_cost must be at least 1".to_string(),
            ));
        }

        if self.security.token_exp_secs == 0 {
            return Err(ConfigError::Message(
                "security.token_exp_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
