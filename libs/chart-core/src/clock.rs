//! Clock capability for series resampling
//!
//! A resampled series extends to "now" so charts stay current between
//! data-source refreshes. The current time is always injected through
//! this trait; the resampling computation itself never reads a global
//! clock, which keeps it deterministic under test.

use chrono::Utc;

/// Source of the current Unix timestamp.
pub trait Clock {
    /// Current time as Unix seconds.
    fn now_seconds(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Fixed time for deterministic tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_seconds(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_configured_time() {
        let clock = FixedClock(1_708_123_456);
        assert_eq!(clock.now_seconds(), 1_708_123_456);
        assert_eq!(clock.now_seconds(), 1_708_123_456);
    }

    #[test]
    fn test_system_clock_is_past_epoch() {
        let clock = SystemClock;
        assert!(clock.now_seconds() > 0);
    }
}
