//! Test identifier generators — deterministic `IdGenerator` implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use agenda_core::id::IdGenerator;

/// A generator that hands out `"{namespace}-1"`, `"{namespace}-2"`, … in
/// call order. Used in tests that assert on the assigned identifier.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    /// Create a generator whose first identifier ends in `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn new_id(&self, namespace: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{namespace}-{n}")
    }
}

/// A misbehaving generator that always returns an empty string. Useful for
/// testing identifier validation.
#[derive(Debug, Clone, Copy)]
pub struct BlankIdGenerator;

impl IdGenerator for BlankIdGenerator {
    fn new_id(&self, _namespace: &str) -> String {
        String::new()
    }
}
