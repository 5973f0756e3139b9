//! Persisted form of the Evento aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::EventoStatus;
use super::value_objects::{Artista, Localizacao};

/// Full state of an Evento as written by repositories.
///
/// Fields hold raw values so that a corrupt row can still be read and then
/// rejected by [`Evento::from_snapshot`](super::aggregates::Evento::from_snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventoSnapshot {
    /// Identifier, validated on rehydration.
    pub evento_id: String,
    /// Venue.
    pub localizacao: Localizacao,
    /// Scheduled date.
    pub data: DateTime<Utc>,
    /// Line-up artists, validated non-empty on rehydration.
    pub line_up: Option<Vec<Artista>>,
    /// Lifecycle status.
    pub status: EventoStatus,
    /// Number of domain events reflected in this state.
    pub version: i64,
}
