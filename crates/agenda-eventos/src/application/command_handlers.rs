//! Command handlers for the Evento context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: load aggregate, execute command, persist the
//! snapshot, commit the produced events.

use agenda_core::aggregate::AggregateRoot;
use agenda_core::clock::Clock;
use agenda_core::command::Command;
use agenda_core::error::DomainError;
use agenda_core::id::IdGenerator;
use tracing::{info, instrument, warn};

use crate::domain::aggregates::Evento;
use crate::domain::commands::{AtualizarLineUp, CancelarEvento, CriarEvento, RemarcarEvento};
use crate::domain::errors::EventoError;
use crate::domain::events::EventoEvent;
use crate::domain::repository::EventoRepository;
use crate::domain::value_objects::EventoId;

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct EventoCommandResult {
    /// The event affected by the command.
    pub evento_id: EventoId,
    /// The domain events produced and persisted.
    pub events: Vec<EventoEvent>,
}

/// Loads the event stored under the raw identifier `evento_id`.
///
/// # Errors
///
/// Returns `EventoError::InvalidIdentifier` for an empty id,
/// `EventoError::NotFound` if nothing is stored under it, and
/// `EventoError::Persistence` if the repository fails.
pub(crate) async fn load(
    evento_id: &str,
    repo: &dyn EventoRepository,
) -> Result<Evento, EventoError> {
    let id = EventoId::new(evento_id)?;
    match repo.find_by_id(&id).await? {
        Some(evento) => Ok(evento),
        None => {
            warn!(evento_id = %id, "evento not found");
            Err(EventoError::NotFound(id))
        }
    }
}

async fn persist(
    mut evento: Evento,
    repo: &dyn EventoRepository,
) -> Result<EventoCommandResult, EventoError> {
    repo.save(&evento).await.inspect_err(|e| {
        if let DomainError::ConcurrencyConflict {
            expected, actual, ..
        } = e
        {
            warn!(evento_id = %evento.id(), expected, actual, "concurrent update rejected");
        }
    })?;

    let events = evento.commit();
    Ok(EventoCommandResult {
        evento_id: evento.id().clone(),
        events,
    })
}

fn rejected(operation: &'static str) -> impl FnOnce(&EventoError) {
    move |e| warn!(operation, error = %e, "evento command rejected")
}

/// Handles the `CriarEvento` command: assigns an identifier, creates the
/// aggregate, and persists it.
///
/// # Errors
///
/// Returns `EventoError::InvalidIdentifier` if the generator yields an empty
/// id, or `EventoError::Persistence` if saving fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id))]
pub async fn handle_criar_evento(
    command: &CriarEvento,
    clock: &dyn Clock,
    ids: &dyn IdGenerator,
    repo: &dyn EventoRepository,
) -> Result<EventoCommandResult, EventoError> {
    let id = EventoId::generate(ids).inspect_err(rejected("criar"))?;

    let evento = Evento::criar(
        id,
        command.localizacao.clone(),
        command.data,
        command.line_up.clone(),
        command.correlation_id,
        clock,
    );

    let result = persist(evento, repo).await?;
    info!(
        command = command.command_type(),
        evento_id = %result.evento_id,
        data = %command.data,
        "evento created"
    );
    Ok(result)
}

/// Handles the `RemarcarEvento` command: loads the aggregate, moves it to the
/// new date, and persists it.
///
/// # Errors
///
/// Returns `EventoError::NotFound` for an unknown id, the rule violation
/// raised by `Evento::remarcar`, or `EventoError::Persistence`.
#[instrument(skip_all, fields(evento_id = %command.evento_id, correlation_id = %command.correlation_id))]
pub async fn handle_remarcar_evento(
    command: &RemarcarEvento,
    clock: &dyn Clock,
    repo: &dyn EventoRepository,
) -> Result<EventoCommandResult, EventoError> {
    let mut evento = load(&command.evento_id, repo).await?;

    evento
        .remarcar(command.nova_data, command.correlation_id, clock)
        .inspect_err(rejected("remarcar"))?;

    let result = persist(evento, repo).await?;
    info!(
        command = command.command_type(),
        nova_data = %command.nova_data,
        "evento rescheduled"
    );
    Ok(result)
}

/// Handles the `AtualizarLineUp` command: loads the aggregate, replaces its
/// line-up, and persists it.
///
/// # Errors
///
/// Returns `EventoError::NotFound` for an unknown id,
/// `EventoError::EventCancelled` for a cancelled event, or
/// `EventoError::Persistence`.
#[instrument(skip_all, fields(evento_id = %command.evento_id, correlation_id = %command.correlation_id))]
pub async fn handle_atualizar_line_up(
    command: &AtualizarLineUp,
    clock: &dyn Clock,
    repo: &dyn EventoRepository,
) -> Result<EventoCommandResult, EventoError> {
    let mut evento = load(&command.evento_id, repo).await?;

    evento
        .atualizar_line_up(command.novo_line_up.clone(), command.correlation_id, clock)
        .inspect_err(rejected("atualizar_line_up"))?;

    let result = persist(evento, repo).await?;
    info!(
        command = command.command_type(),
        artistas = command.novo_line_up.iter().count(),
        "line-up updated"
    );
    Ok(result)
}

/// Handles the `CancelarEvento` command: loads the aggregate, cancels it,
/// and persists it.
///
/// # Errors
///
/// Returns `EventoError::NotFound` for an unknown id,
/// `EventoError::AlreadyCancelled` for a cancelled event, or
/// `EventoError::Persistence`.
#[instrument(skip_all, fields(evento_id = %command.evento_id, correlation_id = %command.correlation_id))]
pub async fn handle_cancelar_evento(
    command: &CancelarEvento,
    clock: &dyn Clock,
    repo: &dyn EventoRepository,
) -> Result<EventoCommandResult, EventoError> {
    let mut evento = load(&command.evento_id, repo).await?;

    evento
        .cancelar(command.correlation_id, clock)
        .inspect_err(rejected("cancelar"))?;

    let result = persist(evento, repo).await?;
    info!(command = command.command_type(), "evento cancelled");
    Ok(result)
}
