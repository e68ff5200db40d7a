//! Scope timing with a human-readable report.

use std::time::Instant;

use crate::HumanReadableTime;
use crate::pal::{Platform, PlatformFacade};

/// Measures the time from its creation until it is stopped or dropped, then reports it.
///
/// The report goes to standard output and looks like this:
///
/// ```text
/// finished computation at Sat Oct 17 18:17:00 2026
/// elapsed time: 2 ms (2503 µs)
/// ```
///
/// If [`stop()`][Self::stop] is never called, the report is emitted when the timer is dropped.
/// This happens on every exit path from the enclosing scope, including early returns, `?`
/// propagation and panic unwinding. A timer reports at most once on drop, so calling `stop()`
/// and then letting the timer go out of scope produces a single report.
///
/// # Examples
///
/// ```
/// use code_utils::Timer;
///
/// fn expensive() -> u64 {
///     let _timer = Timer::new();
///     (0..10_000_u64).sum()
/// } // The report is printed here.
///
/// # expensive();
/// ```
///
/// Explicit stop, to use the measured value:
///
/// ```
/// use code_utils::Timer;
///
/// let mut timer = Timer::new();
/// std::hint::black_box((0..10_000_u64).sum::<u64>());
/// let elapsed = timer.stop();
///
/// println!("took {} ns", elapsed.nanos());
/// ```
#[derive(Debug)]
#[must_use = "the elapsed time is measured until the timer is stopped or dropped"]
pub struct Timer {
    platform: PlatformFacade,
    start: Instant,
    reported: bool,
}

impl Timer {
    /// Creates a timer and starts measuring immediately.
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        let start = platform.now();

        Self {
            platform,
            start,
            reported: false,
        }
    }

    /// Starts measuring again from now.
    ///
    /// This does not clear the reported state: a timer that was already stopped will not
    /// report again on drop.
    pub fn restart(&mut self) {
        self.start = self.platform.now();
    }

    /// Returns the time elapsed since the timer was created or last restarted, without
    /// reporting it.
    #[must_use]
    pub fn elapsed(&self) -> HumanReadableTime {
        self.platform
            .now()
            .saturating_duration_since(self.start)
            .into()
    }

    /// Reports the time elapsed since the timer was created or last restarted and returns it.
    ///
    /// The timer will not report again when dropped.
    pub fn stop(&mut self) -> HumanReadableTime {
        let elapsed = self.elapsed();

        self.platform.emit_report(&format!(
            "finished computation at {}\nelapsed time: {elapsed}\n",
            self.platform.local_timestamp()
        ));

        self.reported = true;

        elapsed
    }

    /// Whether the timer has already emitted its report.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        self.reported
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if !self.reported {
            self.stop();
        }
    }
}
