//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file). It is built once at
//! startup and handed to the tools and the storage layer by reference.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// PostgreSQL connection settings for the coding-language table.
    pub database: DatabaseConfig,

    /// External weather service settings.
    pub weather: WeatherConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Database connection settings.
///
/// Two deployment naming conventions are accepted: `DB_DATABASE` /
/// `DB_USERNAME` take precedence over `DB_NAME` / `DB_USER`.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,

    /// Absent (or empty) means every storage-backed tool refuses to connect.
    pub password: Option<String>,

    /// Upper bound on establishing a connection.
    pub connect_timeout_secs: u64,
}

/// Custom Debug implementation to redact the password from logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

/// Weather lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL; the city is appended as a path segment.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            username: "postgres".to_string(),
            password: None,
            connect_timeout_secs: 10,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://wttr.in".to_string(),
            timeout_secs: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "demo-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            database: DatabaseConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl DatabaseConfig {
    /// Read database settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read database settings through an arbitrary key lookup.
    ///
    /// Empty values are treated as unset so that `DB_PASSWORD=` in a `.env`
    /// file behaves like a missing password.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("DB_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid DB_PORT value: {}", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        let connect_timeout_secs = get("DB_CONNECT_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.connect_timeout_secs);

        Self {
            host: get("DB_HOST").unwrap_or(defaults.host),
            port,
            database: get("DB_DATABASE")
                .or_else(|| get("DB_NAME"))
                .unwrap_or(defaults.database),
            username: get("DB_USERNAME")
                .or_else(|| get("DB_USER"))
                .unwrap_or(defaults.username),
            password: get("DB_PASSWORD"),
            connect_timeout_secs,
        }
    }

    /// Whether a password has been configured.
    pub fn has_credential(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Connection target without the password, e.g. `app@db:5432/langs`.
    pub fn target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.username, self.host, self.port, self.database
        )
    }
}

impl WeatherConfig {
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            endpoint: lookup("WEATHER_ENDPOINT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.endpoint),
            timeout_secs: lookup("WEATHER_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.database = DatabaseConfig::from_env();
        config.weather = WeatherConfig::from_lookup(|key| std::env::var(key).ok());

        config
    }

    /// Check the configuration for values that cannot work at runtime.
    pub fn validate(&self) -> Result<()> {
        if self.database.port == 0 {
            return Err(Error::config("database port must be non-zero"));
        }
        if self.weather.endpoint.trim().is_empty() {
            return Err(Error::config("weather endpoint must not be empty"));
        }
        if self.weather.timeout_secs == 0 {
            return Err(Error::config("weather timeout must be at least one second"));
        }
        Ok(())
    }
}
