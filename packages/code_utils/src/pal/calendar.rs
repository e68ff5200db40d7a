//! Broken-down calendar time and its `ctime` text form.

use std::fmt;

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A point in wall-clock time, split into calendar fields.
///
/// Field ranges follow the C `struct tm` conventions: `month` and `weekday` are zero-based
/// (January and Sunday are 0), `day` is 1-31.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CalendarTime {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
    pub(crate) weekday: u32,
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
}

impl CalendarTime {
    /// Converts seconds since the Unix epoch into a UTC calendar time.
    #[cfg(any(test, not(windows)))]
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "civil date arithmetic on non-negative values that fit comfortably in range"
    )]
    pub(crate) fn from_unix_seconds_utc(seconds: u64) -> Self {
        const SECONDS_PER_DAY: u64 = 86_400;

        let days = seconds / SECONDS_PER_DAY;
        let seconds_of_day = seconds % SECONDS_PER_DAY;

        // Days are shifted so that the era starts on 0000-03-01, which puts the leap day
        // at the end of each year.
        let shifted = days + 719_468;
        let era = shifted / 146_097;
        let day_of_era = shifted - era * 146_097;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 2
        } else {
            shifted_month - 10
        };
        let year = year_of_era + era * 400 + u64::from(month <= 1);

        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
            // 1970-01-01 was a Thursday.
            weekday: ((days + 4) % 7) as u32,
            hour: (seconds_of_day / 3600) as u32,
            minute: (seconds_of_day % 3600 / 60) as u32,
            second: (seconds_of_day % 60) as u32,
        }
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weekday = usize::try_from(self.weekday)
            .ok()
            .and_then(|index| WEEKDAY_NAMES.get(index))
            .unwrap_or(&"???");

        let month = usize::try_from(self.month)
            .ok()
            .and_then(|index| MONTH_NAMES.get(index))
            .unwrap_or(&"???");

        write!(
            f,
            "{weekday} {month} {day:>2} {hour:02}:{minute:02}:{second:02} {year}",
            day = self.day,
            hour = self.hour,
            minute = self.minute,
            second = self.second,
            year = self.year,
        )
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn formats_like_ctime() {
        let time = CalendarTime {
            year: 2026,
            month: 9,
            day: 17,
            weekday: 6,
            hour: 8,
            minute: 5,
            second: 3,
        };

        assert_eq!(time.to_string(), "Sat Oct 17 08:05:03 2026");
    }

    #[test]
    fn single_digit_day_is_space_padded() {
        let time = CalendarTime {
            year: 1999,
            month: 0,
            day: 7,
            weekday: 4,
            hour: 23,
            minute: 59,
            second: 59,
        };

        assert_eq!(time.to_string(), "Thu Jan  7 23:59:59 1999");
    }

    #[test]
    fn out_of_range_names_do_not_panic() {
        let time = CalendarTime {
            year: 2000,
            month: 12,
            day: 1,
            weekday: 7,
            hour: 0,
            minute: 0,
            second: 0,
        };

        assert_eq!(time.to_string(), "??? ???  1 00:00:00 2000");
    }

    #[test]
    fn converts_unix_seconds() {
        let cases = [
            (0, "Thu Jan  1 00:00:00 1970"),
            (1_700_000_000, "Tue Nov 14 22:13:20 2023"),
            (951_782_400, "Tue Feb 29 00:00:00 2000"),
            (4_102_444_799, "Thu Dec 31 23:59:59 2099"),
        ];

        for (seconds, expected) in cases {
            assert_eq!(
                CalendarTime::from_unix_seconds_utc(seconds).to_string(),
                expected,
                "failed for {seconds}"
            );
        }
    }
}
