//! Typed settings for the HTTP server and the store.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://whocodes.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database: DatabaseConfig,
    /// Request bodies above this size are rejected with 413.
    pub body_limit_bytes: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite URL, e.g. `sqlite://whocodes.db` or `sqlite::memory:`.
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Private in-memory database. One connection, so every query sees the same data.
    pub fn in_memory() -> Self {
        DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            database: DatabaseConfig::default(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}
