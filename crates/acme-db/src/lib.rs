//! # Acme DB
//!
//! Database pool initialization for the Acme dashboard API.
//!
//! The pool is built once at startup from a [`DatabaseConfig`] and handed to
//! whatever needs it; nothing in the workspace reaches for a global handle.
//!
//! # Example
//!
//! ```ignore
//! use acme_config::DatabaseConfig;
//! use acme_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()?)?;
//!     // Use pool for database operations
//!     Ok(())
//! }
//! ```

use std::str::FromStr;

use acme_config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;

/// Builds the PostgreSQL connection pool described by `config`.
///
/// The pool connects lazily: the first query opens the connection, and a
/// connection that cannot be established within `config.connect_timeout`
/// surfaces as a [`sqlx::Error::PoolTimedOut`] (or the underlying I/O error)
/// on that query. Idle connections are never reaped.
///
/// # Errors
///
/// Returns an error if `config.url` is not a valid PostgreSQL connection
/// string.
pub fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&config.url)?;
    let ssl_override = config.ssl_mode_override();
    if let Some(mode) = ssl_override {
        options = options.ssl_mode(mode);
    }

    info!(
        max_connections = config.max_connections,
        connect_timeout_secs = config.connect_timeout.as_secs(),
        ssl_mode = ?ssl_override,
        "Initializing database pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .acquire_timeout(config.connect_timeout)
        .connect_lazy_with(options);

    Ok(pool)
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
