//! Domain model for the Evento context.

pub mod aggregates;
pub mod commands;
pub mod errors;
pub mod events;
pub mod repository;
pub mod snapshot;
pub mod status;
pub mod value_objects;
