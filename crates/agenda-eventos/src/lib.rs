//! Agenda — Evento lifecycle bounded context.
//!
//! Responsible for scheduling events at a venue, rescheduling them, assigning
//! their line-up and cancelling them. The `Evento` aggregate enforces the
//! lifecycle rules; the application layer loads, mutates and persists it
//! through the `EventoRepository` port.

pub mod application;
pub mod domain;
