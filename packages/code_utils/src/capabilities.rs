//! Capability traits that classify types at compile time.
//!
//! These traits are used as bounds by the rest of the package. A type that does not have the
//! required capability is rejected by the compiler; nothing is checked at runtime.
//!
//! * [`Container`] - a type that exposes its elements as a borrowing iterator.
//! * [`Scalar`] - a value that can be written as text and compared for equality.
//! * [`Printable`][crate::Printable] - a [`Scalar`] or a [`Container`] of scalars.
//! * [`UniformRandomBitGenerator`] - produces uniformly distributed unsigned integers in a fixed
//!   range.
//! * [`RandomNumberEngine`] - a seedable, comparable and serializable generator.

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// A type whose elements can be visited in order without consuming it.
///
/// Implemented for the standard sequence and ordered set collections and for arrays.
/// Containers whose elements are [`Scalar`] are [`Printable`][crate::Printable].
pub trait Container {
    /// The type of the elements.
    type Element;

    /// Iterates over the elements in their natural order.
    fn elements(&self) -> impl Iterator<Item = &Self::Element>;
}

impl<T> Container for Vec<T> {
    type Element = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Container for VecDeque<T> {
    type Element = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Container for LinkedList<T> {
    type Element = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Container for BTreeSet<T> {
    type Element = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Element = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// A single value that is written as text and can be compared with its peers.
///
/// Implement this for your own types to make them [`Printable`][crate::Printable], both on
/// their own and as elements of a [`Container`].
///
/// Containers are deliberately not scalars, which is what keeps containers of containers from
/// being printable.
pub trait Scalar: Display + PartialEq {}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(impl Scalar for $t {})*
    };
}

impl_scalar!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, String,
    &str,
);

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for u128 {}
    impl Sealed for usize {}
}

/// An unsigned primitive integer type. This trait is sealed.
pub trait Unsigned: sealed::Sealed + Copy + Ord + Debug + Display + FromStr {}

impl Unsigned for u8 {}
impl Unsigned for u16 {}
impl Unsigned for u32 {}
impl Unsigned for u64 {}
impl Unsigned for u128 {}
impl Unsigned for usize {}

/// A source of uniformly distributed unsigned integers in the range `MIN..=MAX`.
///
/// Implementations must guarantee `MIN < MAX`. The trait cannot enforce this, so each
/// implementation is expected to check it next to its `impl` block with a `const` assertion:
///
/// ```
/// use code_utils::UniformRandomBitGenerator;
///
/// struct Coin(u8);
///
/// impl UniformRandomBitGenerator for Coin {
///     type Output = u8;
///
///     const MIN: u8 = 0;
///     const MAX: u8 = 1;
///
///     fn generate(&mut self) -> u8 {
///         self.0 ^= 1;
///         self.0
///     }
/// }
///
/// const _: () = assert!(Coin::MIN < Coin::MAX);
///
/// assert_eq!(Coin(0).generate(), 1);
/// ```
pub trait UniformRandomBitGenerator {
    /// The type of the generated values.
    type Output: Unsigned;

    /// The smallest value that can be generated.
    const MIN: Self::Output;

    /// The largest value that can be generated.
    const MAX: Self::Output;

    /// Advances the generator and returns the next value.
    fn generate(&mut self) -> Self::Output;
}

/// A deterministic generator whose whole future output is determined by its state.
///
/// Engines can be default-constructed, constructed from a seed value, cloned, reseeded,
/// compared (equal engines produce equal sequences), advanced without producing output and
/// serialized to and from text via [`Display`] and [`FromStr`].
pub trait RandomNumberEngine:
    UniformRandomBitGenerator + Default + Clone + Eq + Display + FromStr
{
    /// Creates an engine whose state is derived from `seed`.
    fn from_seed_value(seed: Self::Output) -> Self;

    /// Resets the engine to the default-constructed state.
    fn reseed_default(&mut self) {
        *self = Self::default();
    }

    /// Resets the engine to the state derived from `seed`.
    fn reseed(&mut self, seed: Self::Output) {
        *self = Self::from_seed_value(seed);
    }

    /// Advances the engine `count` times, discarding the generated values.
    fn discard(&mut self, count: u64) {
        for _ in 0..count {
            self.generate();
        }
    }
}
