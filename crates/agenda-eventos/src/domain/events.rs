//! Domain events for the Evento context.

use agenda_core::event::{DomainEvent, EventMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{EventoId, LineUp, Localizacao};

/// Event type name for [`EventoAgendado`].
pub const EVENTO_AGENDADO_EVENT_TYPE: &str = "evento.agendado";
/// Event type name for [`EventoRemarcado`].
pub const EVENTO_REMARCADO_EVENT_TYPE: &str = "evento.remarcado";
/// Event type name for [`LineUpAtualizado`].
pub const LINE_UP_ATUALIZADO_EVENT_TYPE: &str = "evento.line_up_atualizado";
/// Event type name for [`EventoCancelado`].
pub const EVENTO_CANCELADO_EVENT_TYPE: &str = "evento.cancelado";

/// Emitted when an event is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventoAgendado {
    /// The new event.
    pub evento_id: EventoId,
    /// Where it takes place.
    pub localizacao: Localizacao,
    /// When it takes place.
    pub data: DateTime<Utc>,
    /// Initial line-up, if any.
    pub line_up: Option<LineUp>,
}

/// Emitted when an event moves to a new date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventoRemarcado {
    /// The rescheduled event.
    pub evento_id: EventoId,
    /// Date before the change.
    pub data_anterior: DateTime<Utc>,
    /// Date after the change.
    pub nova_data: DateTime<Utc>,
}

/// Emitted when an event's line-up is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineUpAtualizado {
    /// The affected event.
    pub evento_id: EventoId,
    /// The replacement line-up.
    pub line_up: LineUp,
}

/// Emitted when an event is cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventoCancelado {
    /// The cancelled event.
    pub evento_id: EventoId,
}

/// Event payload variants for the Evento context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventoEventKind {
    /// The event was created.
    EventoAgendado(EventoAgendado),
    /// The event was rescheduled.
    EventoRemarcado(EventoRemarcado),
    /// The line-up was replaced.
    LineUpAtualizado(LineUpAtualizado),
    /// The event was cancelled.
    EventoCancelado(EventoCancelado),
}

impl EventoEventKind {
    /// Event type name of this payload.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::EventoAgendado(_) => EVENTO_AGENDADO_EVENT_TYPE,
            Self::EventoRemarcado(_) => EVENTO_REMARCADO_EVENT_TYPE,
            Self::LineUpAtualizado(_) => LINE_UP_ATUALIZADO_EVENT_TYPE,
            Self::EventoCancelado(_) => EVENTO_CANCELADO_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Evento context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventoEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: EventoEventKind,
}

impl DomainEvent for EventoEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("EventoEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
