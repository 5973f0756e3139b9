//! Commands for the Evento context.

use agenda_core::command::Command;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::{LineUp, Localizacao};

/// Command to create a new event.
#[derive(Debug, Clone)]
pub struct CriarEvento {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Venue of the event.
    pub localizacao: Localizacao,
    /// Date of the event; may lie in the past.
    pub data: DateTime<Utc>,
    /// Initial line-up, if already known.
    pub line_up: Option<LineUp>,
}

impl Command for CriarEvento {
    fn command_type(&self) -> &'static str {
        "evento.criar"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to move an event to a new date.
#[derive(Debug, Clone)]
pub struct RemarcarEvento {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Raw identifier of the target event.
    pub evento_id: String,
    /// Requested date.
    pub nova_data: DateTime<Utc>,
}

impl Command for RemarcarEvento {
    fn command_type(&self) -> &'static str {
        "evento.remarcar"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replace an event's line-up.
#[derive(Debug, Clone)]
pub struct AtualizarLineUp {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Raw identifier of the target event.
    pub evento_id: String,
    /// Replacement line-up.
    pub novo_line_up: LineUp,
}

impl Command for AtualizarLineUp {
    fn command_type(&self) -> &'static str {
        "evento.atualizar_line_up"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to cancel an event.
#[derive(Debug, Clone)]
pub struct CancelarEvento {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Raw identifier of the target event.
    pub evento_id: String,
}

impl Command for CancelarEvento {
    fn command_type(&self) -> &'static str {
        "evento.cancelar"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
