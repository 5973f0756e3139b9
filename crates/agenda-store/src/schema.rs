//! Evento store database schema.

use sqlx::PgPool;
use tracing::info;

use crate::error::StoreError;

/// SQL to create the eventos table. Shared with the sqlx migrations.
pub const CREATE_EVENTOS_TABLE: &str = include_str!("../../../migrations/0001_create_eventos.sql");

/// Creates the eventos table and its indexes if they do not exist yet.
///
/// # Errors
///
/// Returns `StoreError::Database` if a statement fails.
pub async fn apply_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::raw_sql(CREATE_EVENTOS_TABLE).execute(pool).await?;
    info!("eventos schema applied");
    Ok(())
}
