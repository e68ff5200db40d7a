//! Real platform implementation backed by the operating system.

use std::time::Instant;

use crate::pal::abstractions::Platform;
use crate::pal::calendar::CalendarTime;

/// Real implementation of the platform abstraction.
///
/// The monotonic clock is [`std::time::Instant`], the wall clock is the operating system's
/// local time and reports go to standard output.
#[derive(Debug, Clone)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn local_timestamp(&self) -> String {
        local_calendar_time().to_string()
    }

    #[cfg_attr(test, mutants::skip)] // Writes to stdout, nothing to observe.
    fn emit_report(&self, report: &str) {
        print!("{report}");
    }
}

#[cfg(unix)]
fn local_calendar_time() -> CalendarTime {
    use std::{mem, ptr};

    // SAFETY: A null pointer asks `time()` to only return the value, no other requirements.
    let now = unsafe { libc::time(ptr::null_mut()) };

    // SAFETY: All-zero is a valid initial value for this type.
    let mut broken_down: libc::tm = unsafe { mem::zeroed() };

    // SAFETY: Both pointers are valid for the duration of the call and `localtime_r`
    // does not retain them.
    let result = unsafe { libc::localtime_r(&raw const now, &raw mut broken_down) };

    // Without time zone information we fall back to UTC.
    if result.is_null() {
        return CalendarTime::from_unix_seconds_utc(u64::try_from(now).unwrap_or_default());
    }

    CalendarTime {
        year: broken_down.tm_year.saturating_add(1900),
        month: u32::try_from(broken_down.tm_mon).unwrap_or_default(),
        day: u32::try_from(broken_down.tm_mday).unwrap_or_default(),
        weekday: u32::try_from(broken_down.tm_wday).unwrap_or_default(),
        hour: u32::try_from(broken_down.tm_hour).unwrap_or_default(),
        minute: u32::try_from(broken_down.tm_min).unwrap_or_default(),
        second: u32::try_from(broken_down.tm_sec).unwrap_or_default(),
    }
}

#[cfg(windows)]
fn local_calendar_time() -> CalendarTime {
    use windows::Win32::System::SystemInformation::GetLocalTime;

    // SAFETY: No safety requirements.
    let now = unsafe { GetLocalTime() };

    CalendarTime {
        year: i32::from(now.wYear),
        month: u32::from(now.wMonth.saturating_sub(1)),
        day: u32::from(now.wDay),
        weekday: u32::from(now.wDayOfWeek),
        hour: u32::from(now.wHour),
        minute: u32::from(now.wMinute),
        second: u32::from(now.wSecond),
    }
}

// Targets without a local time zone report UTC.
#[cfg(not(any(unix, windows)))]
fn local_calendar_time() -> CalendarTime {
    use std::time::{SystemTime, UNIX_EPOCH};

    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |since_epoch| since_epoch.as_secs());

    CalendarTime::from_unix_seconds_utc(seconds)
}
