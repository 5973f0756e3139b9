//! `PostgreSQL` implementation of the `EventoRepository` trait.

use agenda_core::aggregate::AggregateRoot;
use agenda_core::error::DomainError;
use agenda_eventos::domain::aggregates::Evento;
use agenda_eventos::domain::repository::EventoRepository;
use agenda_eventos::domain::snapshot::EventoSnapshot;
use agenda_eventos::domain::status::EventoStatus;
use agenda_eventos::domain::value_objects::{Artista, EventoId, Localizacao};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument, warn};

/// PostgreSQL-backed Evento repository.
///
/// Each event is one row of the `eventos` table holding its full current
/// state; `version` guards concurrent writers.
#[derive(Debug, Clone)]
pub struct PgEventoRepository {
    pool: PgPool,
}

impl PgEventoRepository {
    /// Creates a new `PgEventoRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn stored_version(&self, evento_id: &str) -> Result<i64, DomainError> {
        let version: Option<i64> =
            sqlx::query_scalar("SELECT version FROM eventos WHERE evento_id = $1")
                .bind(evento_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(infrastructure)?;
        Ok(version.unwrap_or(0))
    }
}

#[derive(Debug, FromRow)]
struct EventoRow {
    evento_id: String,
    localizacao: Json<Localizacao>,
    data: DateTime<Utc>,
    line_up: Option<Json<Vec<Artista>>>,
    status: String,
    version: i64,
}

impl TryFrom<EventoRow> for EventoSnapshot {
    type Error = DomainError;

    fn try_from(row: EventoRow) -> Result<Self, Self::Error> {
        let status: EventoStatus = row
            .status
            .parse()
            .map_err(|e| DomainError::Validation(format!("evento {}: {e}", row.evento_id)))?;

        Ok(Self {
            evento_id: row.evento_id,
            localizacao: row.localizacao.0,
            data: row.data,
            line_up: row.line_up.map(|Json(artistas)| artistas),
            status,
            version: row.version,
        })
    }
}

fn infrastructure(e: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(e.to_string())
}

#[async_trait]
impl EventoRepository for PgEventoRepository {
    #[instrument(skip(self, evento), fields(evento_id = %evento.id(), expected = evento.version()))]
    async fn save(&self, evento: &Evento) -> Result<(), DomainError> {
        let expected = evento.version();
        let snapshot = evento.to_snapshot();

        let sql = if expected == 0 {
            "INSERT INTO eventos (evento_id, localizacao, data, line_up, status, version, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, NOW()) \
             ON CONFLICT (evento_id) DO NOTHING"
        } else {
            "UPDATE eventos \
             SET localizacao = $2, data = $3, line_up = $4, status = $5, version = $6, updated_at = NOW() \
             WHERE evento_id = $1 AND version = $7"
        };

        let query = sqlx::query(sql)
            .bind(&snapshot.evento_id)
            .bind(Json(&snapshot.localizacao))
            .bind(snapshot.data)
            .bind(snapshot.line_up.as_ref().map(Json))
            .bind(snapshot.status.as_str())
            .bind(snapshot.version);
        let query = if expected == 0 {
            query
        } else {
            query.bind(expected)
        };

        let result = query
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;

        if result.rows_affected() == 0 {
            let actual = self.stored_version(&snapshot.evento_id).await?;
            warn!(actual, "evento version moved since load");
            return Err(DomainError::ConcurrencyConflict {
                aggregate_id: snapshot.evento_id,
                expected,
                actual,
            });
        }

        debug!(version = snapshot.version, "evento saved");
        Ok(())
    }

    #[instrument(skip(self), fields(evento_id = %id))]
    async fn find_by_id(&self, id: &EventoId) -> Result<Option<Evento>, DomainError> {
        let row: Option<EventoRow> = sqlx::query_as(
            "SELECT evento_id, localizacao, data, line_up, status, version \
             FROM eventos WHERE evento_id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?;

        let Some(row) = row else {
            debug!("evento not stored");
            return Ok(None);
        };

        let snapshot = EventoSnapshot::try_from(row)?;
        Evento::from_snapshot(snapshot)
            .map(Some)
            .map_err(|e| DomainError::Validation(format!("stored evento {id} is invalid: {e}")))
    }
}
