//! Agenda Store — persistence adapters for the Evento aggregate.
//!
//! Provides the PostgreSQL-backed [`PgEventoRepository`] used in production,
//! the [`InMemoryEventoRepository`] used by tests and local runs, and the
//! environment-driven connection setup.

pub mod config;
pub mod error;
pub mod in_memory;
pub mod pg_evento_repository;
pub mod schema;

pub use config::StoreConfig;
pub use error::StoreError;
pub use in_memory::InMemoryEventoRepository;
pub use pg_evento_repository::PgEventoRepository;
