//! Start/stop millisecond stopwatch
//!
//! Timestamps are supplied by the caller, so the clock never reads the
//! platform time itself.

use serde::{Deserialize, Serialize};

/// Stopwatch used both per jump and for the whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    start_ms: Option<u64>,
}

impl Clock {
    pub fn new() -> Self {
        Self { start_ms: None }
    }

    /// Record `now_ms` as the start time
    pub fn start(&mut self, now_ms: u64) {
        self.start_ms = Some(now_ms);
    }

    /// Clear the start time (idempotent)
    pub fn stop(&mut self) {
        self.start_ms = None;
    }

    /// Milliseconds since `start`, or 0 when stopped
    pub fn elapsed(&self, now_ms: u64) -> u64 {
        match self.start_ms {
            Some(start) => now_ms.saturating_sub(start),
            None => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.start_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stopped_clock_reads_zero() {
        let clock = Clock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(5000), 0);
    }

    #[test]
    fn test_start_then_elapsed() {
        let mut clock = Clock::new();
        clock.start(1000);
        assert!(clock.is_running());
        assert_eq!(clock.elapsed(1000), 0);
        assert_eq!(clock.elapsed(1250), 250);
    }

    #[test]
    fn test_restart_resets_origin() {
        let mut clock = Clock::new();
        clock.start(100);
        clock.start(900);
        assert_eq!(clock.elapsed(1000), 100);
    }

    proptest! {
        #[test]
        fn prop_stop_zeroes_and_is_idempotent(start in 0u64..1_000_000, later in 0u64..1_000_000) {
            let mut clock = Clock::new();
            clock.start(start);
            clock.stop();
            prop_assert_eq!(clock.elapsed(start + later), 0);
            clock.stop();
            prop_assert!(!clock.is_running());
            prop_assert_eq!(clock.elapsed(start + later), 0);
        }

        #[test]
        fn prop_elapsed_is_monotonic(start in 0u64..1_000_000, a in 0u64..100_000, b in 0u64..100_000) {
            let mut clock = Clock::new();
            clock.start(start);
            let (t0, t1) = (start + a.min(b), start + a.max(b));
            prop_assert!(clock.elapsed(t0) <= clock.elapsed(t1));
        }
    }
}
