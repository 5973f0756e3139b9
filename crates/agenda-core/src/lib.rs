//! Agenda Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the bounded
//! contexts depend on: time, identity generation, aggregates, commands and
//! domain events. It contains no infrastructure code.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod id;
