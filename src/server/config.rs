use std::time::Duration;

use crate::server::error::config::ConfigError;

static DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 50;
const DEFAULT_DATABASE_MAX_LIFETIME_SECS: u64 = 3600;

/// Server configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_address: String,
    pub log_level: String,
    pub database_max_connections: u32,
    pub database_max_lifetime: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `DATABASE_URL` is required, every other variable falls back to a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let server_address =
            lookup("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let database_max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;
        let database_max_lifetime_secs = parse_or(
            "DATABASE_MAX_LIFETIME_SECS",
            lookup("DATABASE_MAX_LIFETIME_SECS"),
            DEFAULT_DATABASE_MAX_LIFETIME_SECS,
        )?;

        Ok(Self {
            database_url,
            server_address,
            log_level,
            database_max_connections,
            database_max_lifetime: Duration::from_secs(database_max_lifetime_secs),
        })
    }
}

fn parse_or<T>(var: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
