//! Domain events and the metadata envelope they travel in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope fields shared by every recorded event.
///
/// `sequence_number` is 1-based and equals the aggregate version once the
/// event is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub event_id: Uuid,
    /// Same value as [`DomainEvent::event_type`].
    pub event_type: String,
    /// String form of the owning aggregate's identifier.
    pub aggregate_id: String,
    pub sequence_number: i64,
    /// Copied from the command that produced the event.
    pub correlation_id: Uuid,
    /// Read from the injected clock, never from the system time directly.
    pub occurred_at: DateTime<Utc>,
}

/// An immutable fact recorded by an aggregate.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Dotted name such as `"evento.cancelado"`.
    fn event_type(&self) -> &'static str;

    /// JSON form of the event-specific payload (metadata excluded).
    fn to_payload(&self) -> serde_json::Value;

    fn metadata(&self) -> &EventMetadata;

    /// Position of this event in its aggregate's history.
    fn sequence_number(&self) -> i64 {
        self.metadata().sequence_number
    }
}
