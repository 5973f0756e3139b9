//! Evento lifecycle state machine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::EventoError;

/// Lifecycle status of an [`Evento`](super::aggregates::Evento).
///
/// `Agendado` is the initial state. `Cancelado` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventoStatus {
    /// Scheduled.
    Agendado,
    /// Cancelled.
    Cancelado,
}

/// Operations that are subject to the lifecycle rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transicao {
    /// Move the event to a new date.
    Remarcar,
    /// Replace the line-up.
    AtualizarLineUp,
    /// Cancel the event.
    Cancelar,
}

impl fmt::Display for Transicao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Remarcar => "reschedule",
            Self::AtualizarLineUp => "update the lineup of",
            // `EventCancelled` never carries `Cancelar`: a repeat cancel is `AlreadyCancelled`.
            Self::Cancelar => "cancel",
        };
        f.write_str(verb)
    }
}

impl EventoStatus {
    /// Resolves `transicao` from this status.
    ///
    /// Total over every `(status, transition)` pair: returns the resulting
    /// status or the specific rejection.
    ///
    /// # Errors
    ///
    /// - `EventoError::EventCancelled` for `Remarcar`/`AtualizarLineUp` from
    ///   `Cancelado`.
    /// - `EventoError::AlreadyCancelled` for `Cancelar` from `Cancelado`.
    pub fn transition(self, transicao: Transicao) -> Result<Self, EventoError> {
        match (self, transicao) {
            (Self::Agendado, Transicao::Remarcar | Transicao::AtualizarLineUp) => {
                Ok(Self::Agendado)
            }
            (Self::Agendado, Transicao::Cancelar) => Ok(Self::Cancelado),
            (Self::Cancelado, Transicao::Cancelar) => Err(EventoError::AlreadyCancelled),
            (Self::Cancelado, Transicao::Remarcar) => Err(EventoError::EventCancelled {
                transicao: Transicao::Remarcar,
            }),
            (Self::Cancelado, Transicao::AtualizarLineUp) => Err(EventoError::EventCancelled {
                transicao: Transicao::AtualizarLineUp,
            }),
        }
    }

    /// Storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agendado => "AGENDADO",
            Self::Cancelado => "CANCELADO",
        }
    }
}

impl fmt::Display for EventoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown evento status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for EventoStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AGENDADO" => Ok(Self::Agendado),
            "CANCELADO" => Ok(Self::Cancelado),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}
