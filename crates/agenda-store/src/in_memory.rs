//! In-memory implementation of the `EventoRepository` trait.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use agenda_core::aggregate::AggregateRoot;
use agenda_core::error::DomainError;
use agenda_eventos::domain::aggregates::Evento;
use agenda_eventos::domain::repository::EventoRepository;
use agenda_eventos::domain::snapshot::EventoSnapshot;
use agenda_eventos::domain::value_objects::EventoId;
use async_trait::async_trait;
use tracing::debug;

/// Process-local Evento store keyed by identifier string.
///
/// Applies the same optimistic version check as [`crate::PgEventoRepository`].
#[derive(Debug, Default)]
pub struct InMemoryEventoRepository {
    rows: Mutex<HashMap<String, EventoSnapshot>>,
}

impl InMemoryEventoRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored snapshot for `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store lock is poisoned.
    pub fn snapshot(&self, id: &EventoId) -> Result<Option<EventoSnapshot>, DomainError> {
        Ok(self.rows()?.get(id.as_str()).cloned())
    }

    /// Number of stored events.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store lock is poisoned.
    pub fn len(&self) -> Result<usize, DomainError> {
        Ok(self.rows()?.len())
    }

    /// Returns `true` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.rows()?.is_empty())
    }

    fn rows(&self) -> Result<MutexGuard<'_, HashMap<String, EventoSnapshot>>, DomainError> {
        self.rows
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("evento store lock poisoned: {e}")))
    }
}

#[async_trait]
impl EventoRepository for InMemoryEventoRepository {
    async fn save(&self, evento: &Evento) -> Result<(), DomainError> {
        let mut rows = self.rows()?;
        let expected = evento.version();
        let actual = rows.get(evento.id().as_str()).map_or(0, |row| row.version);
        if actual != expected {
            return Err(DomainError::ConcurrencyConflict {
                aggregate_id: evento.id().to_string(),
                expected,
                actual,
            });
        }

        let snapshot = evento.to_snapshot();
        debug!(evento_id = %evento.id(), version = snapshot.version, "evento saved");
        rows.insert(snapshot.evento_id.clone(), snapshot);
        Ok(())
    }

    async fn find_by_id(&self, id: &EventoId) -> Result<Option<Evento>, DomainError> {
        let snapshot = self.rows()?.get(id.as_str()).cloned();
        snapshot
            .map(Evento::from_snapshot)
            .transpose()
            .map_err(|e| DomainError::Validation(format!("stored evento {id} is invalid: {e}")))
    }
}
