use chrono::Utc;
use quotesink_core::Timestamp;
use quotesink_ports::Clock;

/// Real system clock for production use
///
/// This simply returns the current wall-clock time.
/// Use this in production where you want real-time behavior.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
