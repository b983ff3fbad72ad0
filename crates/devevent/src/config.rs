use std::{env, time::Duration};

use thiserror::Error;

/// Errors raised while loading configuration. All of them are fatal at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// MongoDB connection string (required)
    pub database_url: String,
    /// Database name (default: "devevent")
    pub database_name: String,
    /// Server selection/connect timeout in seconds (default: 10)
    pub connect_timeout_seconds: u64,
    /// Application name reported to the server (default: "devevent")
    pub app_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MONGODB_URI` - MongoDB connection string (required)
    /// - `MONGODB_DATABASE` - Database name (default: "devevent")
    /// - `MONGODB_CONNECT_TIMEOUT_SECONDS` - Connect timeout (default: 10)
    /// - `MONGODB_APP_NAME` - Application name (default: "devevent")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("MONGODB_URI")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("MONGODB_URI"))?;

        let connect_timeout_seconds = match lookup("MONGODB_CONNECT_TIMEOUT_SECONDS") {
            Some(value) => value
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    name: "MONGODB_CONNECT_TIMEOUT_SECONDS",
                    value,
                })?,
            None => 10,
        };

        Ok(Self {
            database_url,
            database_name: lookup("MONGODB_DATABASE").unwrap_or_else(|| "devevent".to_string()),
            connect_timeout_seconds,
            app_name: lookup("MONGODB_APP_NAME").unwrap_or_else(|| "devevent".to_string()),
        })
    }

    /// Get the connect timeout as a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}
