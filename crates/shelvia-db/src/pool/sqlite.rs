//! SQLite connection pool management

use std::str::FromStr;
use std::time::Duration;

use shelvia_common::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::schema::init_schema;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a new SQLite connection pool
///
/// An in-memory database lives only as long as its connection, so in that
/// case the pool is pinned to a single connection that never expires.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);

    if config.is_in_memory() {
        debug!(url = %config.url, "Opening in-memory SQLite database");
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect_with(options.journal_mode(SqliteJournalMode::Wal))
        .await
}

/// Create a pool and make sure the schema exists
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = create_pool(config).await?;
    init_schema(&pool).await?;
    info!(max_connections = config.max_connections, "Database ready");
    Ok(pool)
}

/// Fresh private in-memory database with the schema applied
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
}
