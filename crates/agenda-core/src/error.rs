//! Infrastructure-level domain error types.

use thiserror::Error;

/// Error raised by repositories and other infrastructure boundaries.
///
/// Business-rule violations belong to the error type of each bounded
/// context; this type covers what happens around the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Optimistic concurrency conflict.
    #[error(
        "concurrency conflict on aggregate {aggregate_id}: expected version {expected}, found {actual}"
    )]
    ConcurrencyConflict {
        /// The aggregate that had the conflict.
        aggregate_id: String,
        /// The version the writer loaded.
        expected: i64,
        /// The version currently stored.
        actual: i64,
    },

    /// Stored data failed structural validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
