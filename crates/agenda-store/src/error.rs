//! Store setup errors.

use thiserror::Error;

/// Errors raised while configuring or connecting the store.
///
/// Repository operations report failures as `DomainError`; this type only
/// covers setup.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required setting is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The database rejected the connection or a schema statement.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
