//! Conversion of raw nanosecond counts into a coarse and a fine display unit.

use std::fmt;
use std::time::Duration;

use crate::Scalar;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// An elapsed duration expressed in a coarse unit plus a finer auxiliary unit.
///
/// The unit is picked from the magnitude of the raw nanosecond count:
///
/// | elapsed              | coarse | fine |
/// |----------------------|--------|------|
/// | below 1 µs           | ns     | -    |
/// | below 1 ms           | µs     | -    |
/// | below 1 s            | ms     | µs   |
/// | below 1 minute       | s      | ms   |
/// | below 1 hour         | m      | s    |
/// | 1 hour and above     | h      | m    |
///
/// All conversions truncate. When a tier has no fine unit, [`fine_unit()`][Self::fine_unit]
/// is empty and [`fine_magnitude()`][Self::fine_magnitude] equals the raw nanosecond count.
///
/// The text form is always `"<magnitude> <unit> (<fine magnitude> <fine unit>)"`. Without a
/// fine unit the parentheses hold only the nanosecond count, e.g. `"1 µs (1500)"`.
///
/// # Examples
///
/// ```
/// use code_utils::HumanReadableTime;
///
/// let time = HumanReadableTime::from_nanos(1_500_000_000);
///
/// assert_eq!(time.magnitude(), 1);
/// assert_eq!(time.unit(), "s");
/// assert_eq!(time.fine_magnitude(), 1_500);
/// assert_eq!(time.fine_unit(), "ms");
/// assert_eq!(time.to_string(), "1 s (1500 ms)");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct HumanReadableTime {
    unit: &'static str,
    fine_unit: &'static str,
    magnitude: u64,
    fine_magnitude: u64,
    nanos: u64,
}

impl HumanReadableTime {
    /// Selects display units for a raw nanosecond count.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "truncating division is how the units are defined"
    )]
    pub const fn from_nanos(nanos: u64) -> Self {
        let (magnitude, unit, fine_magnitude, fine_unit) = if nanos < NANOS_PER_MICRO {
            (nanos, "ns", nanos, "")
        } else if nanos < NANOS_PER_MILLI {
            (nanos / NANOS_PER_MICRO, "µs", nanos, "")
        } else if nanos < NANOS_PER_SECOND {
            (
                nanos / NANOS_PER_MILLI,
                "ms",
                nanos / NANOS_PER_MICRO,
                "µs",
            )
        } else if nanos < NANOS_PER_MINUTE {
            (
                nanos / NANOS_PER_SECOND,
                "s",
                nanos / NANOS_PER_MILLI,
                "ms",
            )
        } else if nanos < NANOS_PER_HOUR {
            (
                nanos / NANOS_PER_MINUTE,
                "m",
                nanos / NANOS_PER_SECOND,
                "s",
            )
        } else {
            (nanos / NANOS_PER_HOUR, "h", nanos / NANOS_PER_MINUTE, "m")
        };

        Self {
            unit,
            fine_unit,
            magnitude,
            fine_magnitude,
            nanos,
        }
    }

    /// The coarse unit label, e.g. `"ms"`.
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        self.unit
    }

    /// The fine unit label, or an empty string if the coarse unit has no finer companion.
    #[must_use]
    pub const fn fine_unit(&self) -> &'static str {
        self.fine_unit
    }

    /// The elapsed time in the coarse unit.
    #[must_use]
    pub const fn magnitude(&self) -> u64 {
        self.magnitude
    }

    /// The elapsed time in the fine unit (or in nanoseconds if there is no fine unit).
    #[must_use]
    pub const fn fine_magnitude(&self) -> u64 {
        self.fine_magnitude
    }

    /// The raw elapsed time in nanoseconds.
    #[must_use]
    pub const fn nanos(&self) -> u64 {
        self.nanos
    }
}

impl From<Duration> for HumanReadableTime {
    /// Durations longer than `u64::MAX` nanoseconds (about 584 years) saturate.
    fn from(duration: Duration) -> Self {
        Self::from_nanos(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for HumanReadableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({}", self.magnitude, self.unit, self.fine_magnitude)?;

        if !self.fine_unit.is_empty() {
            write!(f, " {}", self.fine_unit)?;
        }

        f.write_str(")")
    }
}

impl Scalar for HumanReadableTime {}
