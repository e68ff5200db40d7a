//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    origin: Instant,
    elapsed: Duration,
    local_timestamp: String,
    reports: Vec<String>,
}

/// Fake implementation of the platform abstraction for testing.
///
/// The clock only moves when a test calls [`advance()`][Self::advance] and reports are captured
/// instead of printed. Clones share the same state, so a test can keep one clone while the timer
/// under test owns another.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                origin: Instant::now(),
                elapsed: Duration::ZERO,
                local_timestamp: "Sat Oct 17 12:00:00 2026".to_string(),
                reports: Vec::new(),
            })),
        }
    }

    /// Moves the fake monotonic clock forward.
    pub(crate) fn advance(&self, by: Duration) {
        let mut state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        state.elapsed = state
            .elapsed
            .checked_add(by)
            .expect("fake clock advanced beyond Duration range");
    }

    pub(crate) fn set_local_timestamp(&self, timestamp: &str) {
        timestamp.clone_into(
            &mut self
                .state
                .lock()
                .expect("FakePlatform state lock should not be poisoned")
                .local_timestamp,
        );
    }

    /// Returns every report emitted so far, oldest first.
    pub(crate) fn reports(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .reports
            .clone()
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Instant {
        let state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        state
            .origin
            .checked_add(state.elapsed)
            .expect("fake clock advanced beyond Instant range")
    }

    fn local_timestamp(&self) -> String {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .local_timestamp
            .clone()
    }

    fn emit_report(&self, report: &str) {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .reports
            .push(report.to_string());
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn clock_stands_still_until_advanced() {
        let platform = FakePlatform::new();

        let first = platform.now();
        let second = platform.now();
        assert_eq!(first, second);

        platform.advance(Duration::from_secs(2));
        assert_eq!(platform.now().duration_since(first), Duration::from_secs(2));
    }

    #[test]
    fn captures_reports_in_order() {
        let platform = FakePlatform::new();
        assert!(platform.reports().is_empty());

        platform.emit_report("first");
        platform.emit_report("second");

        assert_eq!(
            platform.reports(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.set_local_timestamp("Mon Jan  5 09:08:07 2026");
        assert_eq!(platform2.local_timestamp(), "Mon Jan  5 09:08:07 2026");

        let before = platform1.now();
        platform2.advance(Duration::from_millis(5));
        assert_eq!(platform1.now().duration_since(before), Duration::from_millis(5));
    }
}
