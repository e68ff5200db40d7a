//! Platform abstraction layer for the scope timer.
//!
//! This module allows switching between the real platform (monotonic clock, local wall-clock
//! time, standard output) and a fake implementation that tests can fully control.

mod abstractions;
mod calendar;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
