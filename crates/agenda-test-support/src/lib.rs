//! Shared test doubles and utilities for the Agenda event scheduling system.

mod clock;
mod ids;
mod telemetry;

pub use clock::{FixedClock, fixed_now};
pub use ids::{BlankIdGenerator, SequenceIdGenerator};
pub use telemetry::init_tracing;
