//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Instant;

/// Provides the clock readings and output sink used by [`Timer`][crate::Timer].
pub(crate) trait Platform: Debug {
    /// Reads the monotonic clock.
    fn now(&self) -> Instant;

    /// Returns the current local wall-clock time in `ctime` form, without a trailing newline.
    fn local_timestamp(&self) -> String;

    /// Emits a finished timing report.
    fn emit_report(&self, report: &str);
}
