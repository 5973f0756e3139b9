//! Aggregate roots for the Evento context.

use agenda_core::aggregate::AggregateRoot;
use agenda_core::clock::Clock;
use agenda_core::event::EventMetadata;
use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use super::errors::EventoError;
use super::events::{
    EventoAgendado, EventoCancelado, EventoEvent, EventoEventKind, EventoRemarcado,
    LineUpAtualizado,
};
use super::snapshot::EventoSnapshot;
use super::status::{EventoStatus, Transicao};
use super::value_objects::{EventoId, LineUp, Localizacao};

/// Fractional-second digits kept on event dates; matches `TIMESTAMPTZ`.
const DATA_PRECISION_DIGITS: u16 = 6;

/// The aggregate root for a scheduled event.
///
/// Built only through [`Evento::criar`] or rehydrated with
/// [`Evento::from_snapshot`]. Every operation checks all of its guards before
/// touching any field, so a rejected call leaves the aggregate unchanged and
/// records no event.
#[derive(Debug, Clone)]
pub struct Evento {
    id: EventoId,
    localizacao: Localizacao,
    data: DateTime<Utc>,
    line_up: Option<LineUp>,
    status: EventoStatus,
    /// Committed version (events already persisted).
    version: i64,
    /// Uncommitted events pending persistence.
    uncommitted_events: Vec<EventoEvent>,
}

impl Evento {
    /// Creates a new event in the `Agendado` status, producing an
    /// `EventoAgendado` event.
    ///
    /// `data` is not checked against the clock: events in the past may be
    /// created (e.g. imports), only rescheduling requires a future date.
    /// Sub-microsecond digits of `data` are dropped.
    #[must_use]
    pub fn criar(
        id: EventoId,
        localizacao: Localizacao,
        data: DateTime<Utc>,
        line_up: Option<LineUp>,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Self {
        let mut evento = Self {
            id,
            localizacao,
            data: data.trunc_subsecs(DATA_PRECISION_DIGITS),
            line_up,
            status: EventoStatus::Agendado,
            version: 0,
            uncommitted_events: Vec::new(),
        };

        let kind = EventoEventKind::EventoAgendado(EventoAgendado {
            evento_id: evento.id.clone(),
            localizacao: evento.localizacao.clone(),
            data: evento.data,
            line_up: evento.line_up.clone(),
        });
        evento.record(kind, correlation_id, clock);
        evento
    }

    /// Rehydrates an event from storage without replaying its history.
    ///
    /// # Errors
    ///
    /// Returns `EventoError::InvalidIdentifier` for an empty id and
    /// `EventoError::EmptyLineUp` for a stored line-up without artists.
    pub fn from_snapshot(snapshot: EventoSnapshot) -> Result<Self, EventoError> {
        let id = EventoId::new(snapshot.evento_id)?;
        let line_up = snapshot.line_up.map(LineUp::new).transpose()?;

        Ok(Self {
            id,
            localizacao: snapshot.localizacao,
            data: snapshot.data,
            line_up,
            status: snapshot.status,
            version: snapshot.version,
            uncommitted_events: Vec::new(),
        })
    }

    /// Captures the current state, pending events included.
    #[must_use]
    pub fn to_snapshot(&self) -> EventoSnapshot {
        EventoSnapshot {
            evento_id: self.id.to_string(),
            localizacao: self.localizacao.clone(),
            data: self.data,
            line_up: self.line_up.as_ref().map(LineUp::artistas),
            status: self.status,
            version: self.next_sequence_number() - 1,
        }
    }

    #[must_use]
    pub fn id(&self) -> &EventoId {
        &self.id
    }

    #[must_use]
    pub fn localizacao(&self) -> &Localizacao {
        &self.localizacao
    }

    #[must_use]
    pub fn data(&self) -> DateTime<Utc> {
        self.data
    }

    #[must_use]
    pub fn line_up(&self) -> Option<&LineUp> {
        self.line_up.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> EventoStatus {
        self.status
    }

    /// Moves the event to `nova_data`, producing an `EventoRemarcado` event.
    ///
    /// # Errors
    ///
    /// Returns `EventoError::EventCancelled` if the event is cancelled, and
    /// `EventoError::InvalidDate` unless `nova_data`, truncated to whole
    /// microseconds, is strictly after `clock.now()`.
    pub fn remarcar(
        &mut self,
        nova_data: DateTime<Utc>,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), EventoError> {
        let status = self.status.transition(Transicao::Remarcar)?;
        let nova_data = nova_data.trunc_subsecs(DATA_PRECISION_DIGITS);
        if !clock.is_future(nova_data) {
            return Err(EventoError::InvalidDate { nova_data });
        }

        let data_anterior = std::mem::replace(&mut self.data, nova_data);
        self.status = status;

        let kind = EventoEventKind::EventoRemarcado(EventoRemarcado {
            evento_id: self.id.clone(),
            data_anterior,
            nova_data,
        });
        self.record(kind, correlation_id, clock);
        Ok(())
    }

    /// Replaces the line-up wholesale, producing a `LineUpAtualizado` event.
    ///
    /// # Errors
    ///
    /// Returns `EventoError::EventCancelled` if the event is cancelled.
    pub fn atualizar_line_up(
        &mut self,
        novo_line_up: LineUp,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), EventoError> {
        self.status = self.status.transition(Transicao::AtualizarLineUp)?;
        self.line_up = Some(novo_line_up.clone());

        let kind = EventoEventKind::LineUpAtualizado(LineUpAtualizado {
            evento_id: self.id.clone(),
            line_up: novo_line_up,
        });
        self.record(kind, correlation_id, clock);
        Ok(())
    }

    /// Cancels the event, producing an `EventoCancelado` event. There is no
    /// way back.
    ///
    /// # Errors
    ///
    /// Returns `EventoError::AlreadyCancelled` if the event is cancelled.
    pub fn cancelar(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Result<(), EventoError> {
        self.status = self.status.transition(Transicao::Cancelar)?;

        let kind = EventoEventKind::EventoCancelado(EventoCancelado {
            evento_id: self.id.clone(),
        });
        self.record(kind, correlation_id, clock);
        Ok(())
    }

    /// Returns the next sequence number for a new event.
    #[allow(clippy::cast_possible_wrap)]
    fn next_sequence_number(&self) -> i64 {
        self.version + self.uncommitted_events.len() as i64 + 1
    }

    fn record(&mut self, kind: EventoEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = EventoEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id.to_string(),
                sequence_number: self.next_sequence_number(),
                correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };

        self.uncommitted_events.push(event);
    }
}

impl AggregateRoot for Evento {
    type Id = EventoId;
    type Event = EventoEvent;

    fn aggregate_id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    #[allow(clippy::cast_possible_wrap)]
    fn commit(&mut self) -> Vec<Self::Event> {
        let events = std::mem::take(&mut self.uncommitted_events);
        self.version += events.len() as i64;
        events
    }
}
