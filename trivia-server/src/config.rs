//! Database configuration from the environment
//!
//! `DATABASE_URL` wins when set. Otherwise connect options are assembled from:
//! - `DB_HOST` (default: localhost)
//! - `DB_PORT` (default: 5432)
//! - `DB_NAME` (required)
//! - `DB_USER` (required)
//! - `DB_PASSWORD` (optional)

use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// Configuration error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set (or set DATABASE_URL)")]
    Missing(&'static str),

    #[error("{name} must be a port number, got '{value}'")]
    InvalidPort { name: &'static str, value: String },

    #[error("invalid database URL: {0}")]
    InvalidUrl(String),
}

/// Connection settings for the trivia database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: Option<String>,
}

impl DatabaseSettings {
    /// Read the `DB_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the `DB_*` variables through `lookup` (injectable for tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match non_empty("DB_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                name: "DB_PORT",
                value,
            })?,
            None => 5432,
        };

        Ok(Self {
            host: non_empty("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port,
            name: non_empty("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
            user: non_empty("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?,
            password: non_empty("DB_PASSWORD"),
        })
    }

    /// Connect options built field by field, so credentials need no escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);

        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }
}

/// Resolve connect options: explicit URL, then `DATABASE_URL`, then `DB_*`.
pub fn resolve_connect_options(explicit: Option<String>) -> Result<PgConnectOptions, ConfigError> {
    let url = explicit
        .filter(|u| !u.is_empty())
        .or_else(|| std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()));

    match url {
        Some(url) => {
            PgConnectOptions::from_str(&url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))
        }
        None => DatabaseSettings::from_env().map(|s| s.connect_options()),
    }
}
