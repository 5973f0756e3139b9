//! Repository port for the Evento aggregate.

use agenda_core::error::DomainError;
use async_trait::async_trait;

use super::aggregates::Evento;
use super::value_objects::EventoId;

/// Persists and loads Evento snapshots keyed by [`EventoId`].
///
/// Implementations apply optimistic concurrency: `save` writes only when the
/// stored version equals `evento.version()` (a missing row counts as version
/// 0), and stores the state returned by `Evento::to_snapshot`. Dates arrive
/// already truncated to microseconds.
#[async_trait]
pub trait EventoRepository: Send + Sync {
    /// Upserts the full current state of `evento`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConcurrencyConflict` when another writer saved
    /// the event since it was loaded, `DomainError::Infrastructure` on I/O
    /// failure.
    async fn save(&self, evento: &Evento) -> Result<(), DomainError>;

    /// Loads the event stored under `id`. `Ok(None)` means not found.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on I/O failure and
    /// `DomainError::Validation` when the stored row is inconsistent.
    async fn find_by_id(&self, id: &EventoId) -> Result<Option<Evento>, DomainError>;
}
