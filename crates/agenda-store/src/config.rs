//! Environment-driven store configuration.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::error::StoreError;

/// Connection settings for the PostgreSQL store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl StoreConfig {
    /// Pool size used when `DATABASE_MAX_CONNECTIONS` is unset.
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

    /// Reads `DATABASE_URL` (required) and `DATABASE_MAX_CONNECTIONS`
    /// (optional) from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Config` if `DATABASE_URL` is missing or the pool
    /// size is not a positive integer.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`], reading settings through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`StoreConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                StoreError::Config("DATABASE_URL environment variable must be set".to_owned())
            })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => Self::DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(StoreError::Config(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    )));
                }
            },
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    /// Opens a connection pool.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the database is unreachable.
    pub async fn connect(&self) -> Result<PgPool, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.database_url)
            .await?;
        info!(max_connections = self.max_connections, "connected to eventos store");
        Ok(pool)
    }
}
