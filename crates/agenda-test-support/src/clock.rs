//! Test clock — deterministic `Clock` implementation for tests.

use agenda_core::clock::Clock;
use chrono::{DateTime, TimeZone, Utc};

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at midnight UTC on the given calendar day.
    ///
    /// # Panics
    ///
    /// Panics if the date does not exist.
    #[must_use]
    pub fn at_date(year: i32, month: u32, day: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .expect("valid calendar date"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed timestamp shared across tests: 2024-01-01T00:00:00Z.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    FixedClock::at_date(2024, 1, 1).0
}
