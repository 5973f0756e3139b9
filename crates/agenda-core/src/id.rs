//! Identifier generation abstraction.
//!
//! In production, identifiers come from random UUIDs. In tests, a sequential
//! implementation is injected so that identifiers are predictable.

use uuid::Uuid;

/// Produces unique, non-empty identifiers scoped to a namespace.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier for `namespace` (e.g. `"evento"`).
    fn new_id(&self, namespace: &str) -> String;
}

/// Generator producing `"{namespace}-{uuid v4}"` identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self, namespace: &str) -> String {
        format!("{namespace}-{}", Uuid::new_v4())
    }
}
