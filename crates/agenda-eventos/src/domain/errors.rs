//! Error types for the Evento context.

use agenda_core::error::DomainError;
use chrono::{DateTime, Utc};
use thiserror::Error;

use super::status::Transicao;
use super::value_objects::EventoId;

/// Every way an Evento command can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventoError {
    /// An identifier was empty.
    #[error("evento id must not be empty")]
    InvalidIdentifier,

    /// A line-up was built from zero artists.
    #[error("line-up must have at least one artist")]
    EmptyLineUp,

    /// A mutation was attempted on a cancelled event.
    #[error("cannot {transicao} a cancelled event")]
    EventCancelled {
        /// The rejected transition.
        transicao: Transicao,
    },

    /// The requested date is not strictly after the current time.
    #[error("new date must be in the future")]
    InvalidDate {
        /// The rejected date.
        nova_data: DateTime<Utc>,
    },

    /// `cancelar` was called on an event that is already cancelled.
    #[error("event is already cancelled")]
    AlreadyCancelled,

    /// No event is stored under the identifier.
    #[error("Evento não encontrado: {0}")]
    NotFound(EventoId),

    /// The repository failed.
    #[error(transparent)]
    Persistence(#[from] DomainError),
}
