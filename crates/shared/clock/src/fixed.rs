use chrono::{TimeZone, Utc};
use quotesink_core::Timestamp;
use quotesink_ports::Clock;

/// Frozen clock for deterministic tests
///
/// Always returns the instant it was constructed with, so enrichment
/// output (the reference date) is reproducible.
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    pub fn new(instant: Timestamp) -> Self {
        Self { instant }
    }

    /// Convenience constructor from a calendar date at midnight UTC
    pub fn at_date(year: i32, month: u32, day: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.instant
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
