#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Small generic utilities for everyday programs and experiments:
//!
//! * [`print()`] and [`print_values!`] - print any mix of scalars and containers on one line,
//!   with a chosen separator and terminator.
//! * [`Timer`] - measures a scope and reports the elapsed time in human-readable units.
//! * [`Xorshift32`] - a tiny deterministic random number engine whose state can be saved as
//!   text and restored.
//! * [`capabilities`] - traits that decide at compile time what can be printed and what
//!   counts as a random number engine.
//!
//! # Printing
//!
//! ```
//! use code_utils::{Formatter, print_values};
//!
//! let primes = vec![2, 3, 5, 7];
//!
//! // primes { 2 , 3 , 5 , 7 }
//! print_values!("primes", primes);
//!
//! assert_eq!(
//!     Formatter::new().format(&[&"primes", &primes]),
//!     "primes { 2 , 3 , 5 , 7 }\n"
//! );
//! ```
//!
//! # Timing a scope
//!
//! ```
//! use code_utils::Timer;
//!
//! {
//!     let _timer = Timer::new();
//!     std::hint::black_box((0..1_000_u64).sum::<u64>());
//! } // Prints "finished computation at <local time>" and "elapsed time: ..." here.
//! ```
//!
//! # Deterministic random numbers
//!
//! ```
//! use code_utils::{RandomNumberEngine, UniformRandomBitGenerator, Xorshift32};
//!
//! let mut a = Xorshift32::new(7);
//! let mut b = Xorshift32::new(7);
//! a.discard(10);
//! b.discard(10);
//!
//! assert_eq!(a.generate(), b.generate());
//! ```
//!
//! # Features
//!
//! * `logging` - enables [`log_values!`] and [`log_named!`].
//! * `printing` - enables [`trace_values!`].
//!
//! Without these features the macros expand to nothing.
//!
//! # Threading
//!
//! All types are single-threaded by nature: each [`Timer`] and each [`Xorshift32`] owns its
//! state exclusively. Use one instance per thread.

pub mod capabilities;
mod error;
mod human_time;
mod macros;
mod pal;
mod print;
mod timer;
mod xorshift;

pub use capabilities::{
    Container, RandomNumberEngine, Scalar, UniformRandomBitGenerator, Unsigned,
};
pub use error::*;
pub use human_time::HumanReadableTime;
#[doc(hidden)]
pub use print::as_printable;
pub use print::{
    Formatter, LastElement, Piece, Printable, SequenceElement, format_values, print, write_values,
};
pub use timer::Timer;
pub use xorshift::Xorshift32;
