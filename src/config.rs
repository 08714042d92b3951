//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ```bash
//! export APP_ENV="local"
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_ADDRESS="localhost:8080"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//! ```
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file (created if missing)
//! - `HTTP_USER` / `HTTP_PASSWORD` - Basic auth pair for the `/url` endpoints
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - Deployment profile: `local`, `dev` or `prod` (default: `local`)
//! - `HTTP_ADDRESS` - Bind address (default: `localhost:8080`)
//! - `HTTP_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `RUST_LOG` - Log filter, overrides the profile's level

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::api::middleware::basic_auth::BasicCredentials;

/// Deployment profile, selecting log format and verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Human-readable logs at debug level.
    #[default]
    Local,
    /// JSON logs at debug level.
    Dev,
    /// JSON logs at info level.
    Prod,
}

impl Environment {
    /// Default `tracing` filter directive for this profile.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Local | Environment::Dev => "debug",
            Environment::Prod => "info",
        }
    }

    /// Whether logs are emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        !matches!(self, Environment::Local)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{other}'"),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    pub storage_path: String,
    pub http_address: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT`, default: 4).
    pub http_timeout: u64,
    pub http_user: String,
    pub http_password: String,
    /// Maximum number of pooled SQLite connections (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let env = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let http_address =
            env::var("HTTP_ADDRESS").unwrap_or_else(|_| "localhost:8080".to_string());

        let http_timeout = parse_var("HTTP_TIMEOUT", 4)?;

        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;

        Ok(Self {
            env,
            storage_path,
            http_address,
            http_timeout,
            http_user,
            http_password,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `http_address` is not in `host:port` form
    /// - `http_timeout` is zero
    /// - the basic auth login or password is empty
    /// - `db_max_connections` is zero
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.http_address.contains(':') {
            anyhow::bail!(
                "HTTP_ADDRESS must be in format 'host:port', got '{}'",
                self.http_address
            );
        }

        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.http_user.is_empty() {
            anyhow::bail!("HTTP_USER must not be empty");
        }

        if self.http_password.is_empty() {
            anyhow::bail!("HTTP_PASSWORD must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn credentials(&self) -> BasicCredentials {
        BasicCredentials::new(self.http_user.clone(), self.http_password.clone())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Listen address: {}", self.http_address);
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!("  Basic auth user: {} (password: ***)", self.http_user);
        tracing::info!("  Max DB connections: {}", self.db_max_connections);
    }
}

/// Parses an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "APP_ENV",
        "STORAGE_PATH",
        "HTTP_ADDRESS",
        "HTTP_TIMEOUT",
        "HTTP_USER",
        "HTTP_PASSWORD",
        "DB_MAX_CONNECTIONS",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially due to #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            env: Environment::Local,
            storage_path: "./storage/storage.db".to_string(),
            http_address: "localhost:8080".to_string(),
            http_timeout: 4,
            http_user: "admin".to_string(),
            http_password: "secret".to_string(),
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!("DEV".parse::<Environment>().unwrap(), Environment::Dev);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Prod);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_logging_profile() {
        assert_eq!(Environment::Local.default_log_level(), "debug");
        assert!(!Environment::Local.json_logs());
        assert_eq!(Environment::Dev.default_log_level(), "debug");
        assert!(Environment::Dev.json_logs());
        assert_eq!(Environment::Prod.default_log_level(), "info");
        assert!(Environment::Prod.json_logs());
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.http_address = "8080".to_string();
        assert!(config.validate().is_err());
        config.http_address = "0.0.0.0:8080".to_string();

        config.http_timeout = 0;
        assert!(config.validate().is_err());
        config.http_timeout = 4;

        config.http_password = String::new();
        assert!(config.validate().is_err());
        config.http_password = "secret".to_string();

        config.storage_path = "  ".to_string();
        assert!(config.validate().is_err());
        config.storage_path = "storage.db".to_string();

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout() {
        assert_eq!(valid_config().request_timeout(), Duration::from_secs(4));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        // SAFETY: serialized by #[serial]
        unsafe {
            env::set_var("STORAGE_PATH", "/tmp/shortlink.db");
            env::set_var("HTTP_USER", "admin");
            env::set_var("HTTP_PASSWORD", "secret");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.env, Environment::Local);
        assert_eq!(config.storage_path, "/tmp/shortlink.db");
        assert_eq!(config.http_address, "localhost:8080");
        assert_eq!(config.http_timeout, 4);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.credentials(), BasicCredentials::new("admin", "secret"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: serialized by #[serial]
        unsafe {
            env::set_var("APP_ENV", "prod");
            env::set_var("STORAGE_PATH", "/data/urls.db");
            env::set_var("HTTP_ADDRESS", "0.0.0.0:9000");
            env::set_var("HTTP_TIMEOUT", "10");
            env::set_var("HTTP_USER", "ops");
            env::set_var("HTTP_PASSWORD", "hunter2");
            env::set_var("DB_MAX_CONNECTIONS", "8");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.env, Environment::Prod);
        assert_eq!(config.http_address, "0.0.0.0:9000");
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.db_max_connections, 8);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_storage_path() {
        clear_env();
        // SAFETY: serialized by #[serial]
        unsafe {
            env::set_var("HTTP_USER", "admin");
            env::set_var("HTTP_PASSWORD", "secret");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("STORAGE_PATH"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric_timeout() {
        clear_env();
        // SAFETY: serialized by #[serial]
        unsafe {
            env::set_var("STORAGE_PATH", "/tmp/shortlink.db");
            env::set_var("HTTP_USER", "admin");
            env::set_var("HTTP_PASSWORD", "secret");
            env::set_var("HTTP_TIMEOUT", "4s");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("HTTP_TIMEOUT"));

        clear_env();
    }
}
