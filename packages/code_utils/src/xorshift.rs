//! The xorshift32 pseudo-random number engine.

use std::fmt;
use std::num::NonZero;
use std::str::FromStr;

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

use crate::{Error, RandomNumberEngine, UniformRandomBitGenerator};

/// Marsaglia's 32-bit xorshift generator ("xor" algorithm, shifts 13, 17, 5).
///
/// The whole future output is determined by a single `u32` state, which is also the value
/// returned by each generation step.
///
/// The state must never be zero: zero is a fixed point and a generator seeded with it only
/// ever produces zeros. This is not checked. Use [`from_non_zero()`][Self::from_non_zero] to
/// rule it out at the type level.
///
/// The text form (via [`Display`][fmt::Display] and [`FromStr`]) is the decimal state, so a
/// generator can be saved and later restored to continue the exact same sequence.
///
/// # Examples
///
/// ```
/// use code_utils::{RandomNumberEngine, UniformRandomBitGenerator, Xorshift32};
///
/// let mut rng = Xorshift32::default();
/// let first = rng.generate();
///
/// let saved = rng.to_string();
/// let expected = rng.generate();
///
/// let mut restored: Xorshift32 = saved.parse().unwrap();
/// assert_eq!(restored.generate(), expected);
///
/// rng.reseed_default();
/// assert_eq!(rng.generate(), first);
/// ```
///
/// It also plugs into the `rand` ecosystem:
///
/// ```
/// use code_utils::Xorshift32;
/// use rand::Rng;
///
/// let mut rng = Xorshift32::new(2024);
/// let roll = rng.random_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// The state of a default-constructed generator.
    pub const DEFAULT_SEED: u32 = 12;

    /// Creates a generator with `seed` as its state.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Creates a generator with a state that is guaranteed to be valid.
    #[must_use]
    pub const fn from_non_zero(seed: NonZero<u32>) -> Self {
        Self::new(seed.get())
    }

    /// The current state, which is also the most recently generated value.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Reads the state from the start of `input` and returns the unconsumed remainder.
    ///
    /// Leading whitespace is skipped, then the longest run of ASCII digits is read as the new
    /// state. Whatever follows the digits is returned untouched, so several values can be read
    /// from the same text one after another.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if `input` is blank and [`Error::InvalidState`] if it does not
    /// start with a decimal number that fits in `u32`. The state is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use code_utils::Xorshift32;
    ///
    /// let mut first = Xorshift32::default();
    /// let mut second = Xorshift32::default();
    ///
    /// let rest = first.restore_from("  17 99").unwrap();
    /// let rest = second.restore_from(rest).unwrap();
    ///
    /// assert_eq!(first.state(), 17);
    /// assert_eq!(second.state(), 99);
    /// assert!(rest.is_empty());
    /// ```
    pub fn restore_from<'a>(&mut self, input: &'a str) -> crate::Result<&'a str> {
        let input = input.trim_start();

        if input.is_empty() {
            return Err(Error::Empty);
        }

        let digits_end = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());
        let (digits, rest) = input.split_at(digits_end);

        self.state = digits
            .parse()
            .map_err(|source| Error::InvalidState {
                token: first_word(input).to_string(),
                source,
            })?;

        Ok(rest)
    }

    fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

fn first_word(input: &str) -> &str {
    input.split_whitespace().next().unwrap_or(input)
}

// Required by `UniformRandomBitGenerator`.
const _: () = assert!(Xorshift32::MIN < Xorshift32::MAX);

impl UniformRandomBitGenerator for Xorshift32 {
    type Output = u32;

    const MIN: u32 = u32::MIN;
    const MAX: u32 = u32::MAX;

    fn generate(&mut self) -> u32 {
        self.step()
    }
}

impl RandomNumberEngine for Xorshift32 {
    fn from_seed_value(seed: u32) -> Self {
        Self::new(seed)
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl fmt::Display for Xorshift32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}

impl FromStr for Xorshift32 {
    type Err = Error;

    /// Parses the decimal state. Surrounding whitespace is ignored, anything else is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        if token.is_empty() {
            return Err(Error::Empty);
        }

        token
            .parse()
            .map(Self::new)
            .map_err(|source| Error::InvalidState {
                token: token.to_string(),
                source,
            })
    }
}

impl Iterator for Xorshift32 {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl RngCore for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

impl SeedableRng for Xorshift32 {
    /// The state as little-endian bytes.
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(
        Xorshift32: RandomNumberEngine,
        UniformRandomBitGenerator,
        RngCore,
        SeedableRng,
        Send,
        Sync
    );

    #[test]
    fn first_values_from_default_seed() {
        let mut rng = Xorshift32::default();

        assert_eq!(rng.generate(), 3_244_428);
        assert_eq!(rng.generate(), 805_513_228);
        assert_eq!(rng.generate(), 4_115_845_933);
    }

    #[test]
    fn classic_seed_one() {
        let mut rng = Xorshift32::new(1);

        assert_eq!(rng.generate(), 270_369);
        assert_eq!(rng.generate(), 67_634_689);
        assert_eq!(rng.generate(), 2_647_435_461);
    }

    #[test]
    fn generated_value_becomes_state() {
        let mut rng = Xorshift32::new(987_654_321);
        let value = rng.generate();

        assert_eq!(rng.state(), value);
    }

    #[test]
    fn zero_seed_is_a_fixed_point() {
        let mut rng = Xorshift32::new(0);

        assert!(rng.by_ref().take(100).all(|value| value == 0));
    }

    #[test]
    fn from_non_zero_matches_new() {
        let seed = NonZero::new(77_u32).unwrap();

        assert_eq!(Xorshift32::from_non_zero(seed), Xorshift32::new(77));
    }

    #[test]
    fn same_seed_same_sequence() {
        let first: Vec<u32> = Xorshift32::new(42).take(1_000).collect();
        let second: Vec<u32> = Xorshift32::new(42).take(1_000).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn discard_matches_repeated_generation() {
        for count in [0_u64, 1, 2, 17, 500] {
            let mut discarded = Xorshift32::new(5);
            discarded.discard(count);

            let mut stepped = Xorshift32::new(5);
            let mut last = 0;
            for _ in 0..=count {
                last = stepped.generate();
            }

            assert_eq!(discarded.generate(), last, "discard({count})");
        }
    }

    #[test]
    fn reseed_resets_state() {
        let mut rng = Xorshift32::new(3);
        rng.discard(10);

        rng.reseed(3);
        assert_eq!(rng, Xorshift32::new(3));

        rng.reseed_default();
        assert_eq!(rng, Xorshift32::default());
        assert_eq!(rng.state(), Xorshift32::DEFAULT_SEED);
    }

    #[test]
    fn equality_is_state_equality() {
        let mut a = Xorshift32::new(9);
        let mut b = Xorshift32::new(9);
        assert_eq!(a, b);

        a.generate();
        assert_ne!(a, b);

        b.generate();
        assert_eq!(a, b);
    }

    #[test]
    fn display_is_decimal_state() {
        assert_eq!(Xorshift32::new(4_000_000_000).to_string(), "4000000000");
        assert_eq!(Xorshift32::default().to_string(), "12");
    }

    #[test]
    fn text_round_trip_continues_sequence() {
        let mut original = Xorshift32::new(31_337);
        original.discard(123);

        let mut restored: Xorshift32 = original.to_string().parse().unwrap();

        let expected: Vec<u32> = original.take(50).collect();
        let actual: Vec<u32> = restored.by_ref().take(50).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn from_str_ignores_surrounding_whitespace() {
        let rng: Xorshift32 = "\t 55 \n".parse().unwrap();

        assert_eq!(rng.state(), 55);
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert!(matches!("".parse::<Xorshift32>(), Err(Error::Empty)));
        assert!(matches!("   ".parse::<Xorshift32>(), Err(Error::Empty)));
        assert!(matches!(
            "12abc".parse::<Xorshift32>(),
            Err(Error::InvalidState { token, .. }) if token == "12abc"
        ));
        assert!(matches!(
            "-5".parse::<Xorshift32>(),
            Err(Error::InvalidState { .. })
        ));
        assert!(matches!(
            "4294967296".parse::<Xorshift32>(),
            Err(Error::InvalidState { .. })
        ));
    }

    #[test]
    fn restore_from_reads_one_token() {
        let mut rng = Xorshift32::default();

        let rest = rng.restore_from("\n 4321xyz").unwrap();

        assert_eq!(rng.state(), 4321);
        assert_eq!(rest, "xyz");
    }

    #[test]
    fn restore_from_failure_keeps_state() {
        let mut rng = Xorshift32::new(8);

        assert!(matches!(rng.restore_from(" \t"), Err(Error::Empty)));
        assert!(matches!(
            rng.restore_from(" abc 12"),
            Err(Error::InvalidState { token, .. }) if token == "abc"
        ));
        assert!(matches!(
            rng.restore_from("99999999999"),
            Err(Error::InvalidState { .. })
        ));

        assert_eq!(rng.state(), 8);
    }

    #[test]
    fn rng_core_next_u32_matches_generate() {
        let mut via_rand = Xorshift32::new(1234);
        let mut via_engine = Xorshift32::new(1234);

        for _ in 0..10 {
            assert_eq!(via_rand.next_u32(), via_engine.generate());
        }
    }

    #[test]
    fn rng_core_next_u64_combines_two_steps() {
        let mut rng = Xorshift32::new(1);
        let mut reference = Xorshift32::new(1);

        let low = u64::from(reference.generate());
        let high = u64::from(reference.generate());

        assert_eq!(rng.next_u64(), (high << 32) | low);
    }

    #[test]
    fn rng_core_fill_bytes_uses_little_endian_words() {
        let mut rng = Xorshift32::new(1);
        let mut bytes = [0_u8; 6];

        rng.fill_bytes(&mut bytes);

        let mut reference = Xorshift32::new(1);
        let first = reference.generate().to_le_bytes();
        let second = reference.generate().to_le_bytes();

        assert_eq!(bytes[..4], first);
        assert_eq!(bytes[4..], second[..2]);
    }

    #[test]
    fn seedable_from_le_bytes() {
        assert_eq!(
            Xorshift32::from_seed(42_u32.to_le_bytes()),
            Xorshift32::new(42)
        );
    }
}
