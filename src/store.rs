//! SQLite pool setup. The database file is created on first connect.

use crate::config::DatabaseConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Open a pool for `config.url` with foreign keys enforced.
/// In-memory databases keep their connections forever; dropping the last one would drop the data.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    let mut opts = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| ConfigError::Load(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));
    if !config.is_in_memory() {
        opts = opts
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    let mut pool_opts = SqlitePoolOptions::new().max_connections(config.max_connections);
    if config.is_in_memory() {
        pool_opts = pool_opts
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    let pool = pool_opts.connect_with(opts).await?;
    tracing::info!(url = %config.url, max_connections = config.max_connections, "database connected");
    Ok(pool)
}
