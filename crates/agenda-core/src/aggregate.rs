//! Aggregate root abstraction.

use crate::event::DomainEvent;

/// Trait for aggregate roots persisted as versioned snapshots.
///
/// Mutating operations record domain events as *pending*. Once the owning
/// repository has stored the snapshot, [`AggregateRoot::commit`] folds those
/// events into the version and hands them back to the caller.
pub trait AggregateRoot: Send + Sync {
    /// Identifier type of the aggregate.
    type Id: Clone + Eq + std::fmt::Debug + std::fmt::Display;

    /// The event type this aggregate produces.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> &Self::Id;

    /// Returns the committed version (number of events already persisted).
    fn version(&self) -> i64;

    /// Returns events produced by command handling that are not yet persisted.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Marks pending events as persisted, advancing the version, and returns
    /// them in the order they were recorded.
    fn commit(&mut self) -> Vec<Self::Event>;
}
