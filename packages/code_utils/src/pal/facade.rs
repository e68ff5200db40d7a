//! Platform facade for switching between real and fake implementations.

use std::time::Instant;

use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Facade that allows switching between real and fake platform implementations.
#[derive(Debug, Clone)]
pub(crate) enum PlatformFacade {
    /// Real platform implementation backed by the operating system.
    Real(RealPlatform),

    /// Fake platform implementation for testing.
    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    /// Creates a new platform facade using the real implementation.
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform)
    }

    /// Creates a new platform facade using the fake implementation.
    #[cfg(test)]
    pub(crate) fn fake(fake_platform: FakePlatform) -> Self {
        Self::Fake(fake_platform)
    }
}

impl Platform for PlatformFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(platform) => platform.now(),
            #[cfg(test)]
            Self::Fake(platform) => platform.now(),
        }
    }

    fn local_timestamp(&self) -> String {
        match self {
            Self::Real(platform) => platform.local_timestamp(),
            #[cfg(test)]
            Self::Fake(platform) => platform.local_timestamp(),
        }
    }

    fn emit_report(&self, report: &str) {
        match self {
            Self::Real(platform) => platform.emit_report(report),
            #[cfg(test)]
            Self::Fake(platform) => platform.emit_report(report),
        }
    }
}
