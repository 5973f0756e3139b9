//! Query handlers for the Evento context.
//!
//! Loads the current snapshot of an event and returns a read-only view DTO.

use agenda_core::aggregate::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::command_handlers;
use crate::domain::errors::EventoError;
use crate::domain::repository::EventoRepository;
use crate::domain::status::EventoStatus;
use crate::domain::value_objects::{Artista, Localizacao};

/// Read-only view of an Evento aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventoView {
    /// The event identifier.
    pub evento_id: String,
    /// Venue of the event.
    pub localizacao: Localizacao,
    /// Scheduled date.
    pub data: DateTime<Utc>,
    /// Line-up in performance order, if one was set.
    pub line_up: Option<Vec<Artista>>,
    /// Lifecycle status.
    pub status: EventoStatus,
    /// Current version (persisted event count).
    pub version: i64,
}

/// Retrieves an event by its identifier.
///
/// # Errors
///
/// Returns `EventoError::InvalidIdentifier` for an empty id,
/// `EventoError::NotFound` if no event is stored under it, and
/// `EventoError::Persistence` if the repository fails.
#[instrument(skip_all, fields(evento_id = %evento_id))]
pub async fn get_evento_by_id(
    evento_id: &str,
    repo: &dyn EventoRepository,
) -> Result<EventoView, EventoError> {
    let evento = command_handlers::load(evento_id, repo).await?;
    debug!(status = %evento.status(), version = evento.version(), "evento loaded");
    Ok(EventoView {
        evento_id: evento.id().to_string(),
        localizacao: evento.localizacao().clone(),
        data: evento.data(),
        line_up: evento.line_up().map(|line_up| line_up.artistas()),
        status: evento.status(),
        version: evento.version(),
    })
}
