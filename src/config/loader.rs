//! Load `Config` from environment variables (a `.env` file is read by the binary first).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl Config {
    /// Read settings from the process environment. Unset keys use defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, so callers can supply values from anywhere.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(v) => parse(&v, "LISTEN_ADDR")?,
            None => parse(DEFAULT_LISTEN_ADDR, "LISTEN_ADDR")?,
        };
        let body_limit_bytes = parse_or(&lookup, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?;

        Ok(Config {
            listen_addr,
            database: DatabaseConfig { url, max_connections },
            body_limit_bytes,
        })
    }
}

fn parse<T: FromStr>(value: &str, key: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(v) => parse(&v, key),
        None => Ok(default),
    }
}
