//! Evento service — bundles the collaborators every handler needs.

use std::sync::Arc;

use agenda_core::clock::Clock;
use agenda_core::id::IdGenerator;

use crate::application::command_handlers::{self, EventoCommandResult};
use crate::application::query_handlers::{self, EventoView};
use crate::domain::commands::{AtualizarLineUp, CancelarEvento, CriarEvento, RemarcarEvento};
use crate::domain::errors::EventoError;
use crate::domain::repository::EventoRepository;

/// Application service for the Evento lifecycle.
///
/// Cheap to clone; clones share the same clock, generator and repository.
#[derive(Clone)]
pub struct EventoService {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    repository: Arc<dyn EventoRepository>,
}

impl EventoService {
    /// Create a new service from its collaborators.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        repository: Arc<dyn EventoRepository>,
    ) -> Self {
        Self {
            clock,
            ids,
            repository,
        }
    }

    /// Create and persist a new event.
    ///
    /// # Errors
    ///
    /// See [`command_handlers::handle_criar_evento`].
    pub async fn criar_evento(
        &self,
        command: &CriarEvento,
    ) -> Result<EventoCommandResult, EventoError> {
        command_handlers::handle_criar_evento(
            command,
            self.clock.as_ref(),
            self.ids.as_ref(),
            self.repository.as_ref(),
        )
        .await
    }

    /// Move an existing event to a new date.
    ///
    /// # Errors
    ///
    /// See [`command_handlers::handle_remarcar_evento`].
    pub async fn remarcar_evento(
        &self,
        command: &RemarcarEvento,
    ) -> Result<EventoCommandResult, EventoError> {
        command_handlers::handle_remarcar_evento(
            command,
            self.clock.as_ref(),
            self.repository.as_ref(),
        )
        .await
    }

    /// Replace the line-up of an existing event.
    ///
    /// # Errors
    ///
    /// See [`command_handlers::handle_atualizar_line_up`].
    pub async fn atualizar_line_up(
        &self,
        command: &AtualizarLineUp,
    ) -> Result<EventoCommandResult, EventoError> {
        command_handlers::handle_atualizar_line_up(
            command,
            self.clock.as_ref(),
            self.repository.as_ref(),
        )
        .await
    }

    /// Cancel an existing event.
    ///
    /// # Errors
    ///
    /// See [`command_handlers::handle_cancelar_evento`].
    pub async fn cancelar_evento(
        &self,
        command: &CancelarEvento,
    ) -> Result<EventoCommandResult, EventoError> {
        command_handlers::handle_cancelar_evento(
            command,
            self.clock.as_ref(),
            self.repository.as_ref(),
        )
        .await
    }

    /// Look up an event by id.
    ///
    /// # Errors
    ///
    /// See [`query_handlers::get_evento_by_id`].
    pub async fn obter_evento(&self, evento_id: &str) -> Result<EventoView, EventoError> {
        query_handlers::get_evento_by_id(evento_id, self.repository.as_ref()).await
    }
}

impl std::fmt::Debug for EventoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventoService").finish_non_exhaustive()
    }
}
