use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when restoring a random engine from its text form.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input contained nothing but whitespace.
    #[error("no generator state found: expected a decimal integer")]
    Empty,

    /// The input did not start with a decimal integer that fits the generator state.
    #[error("invalid generator state '{token}': {source}")]
    InvalidState {
        /// The whitespace-delimited token that failed to parse.
        token: String,

        /// The underlying integer parsing failure.
        source: ParseIntError,
    },
}

/// A specialized `Result` type for text restore operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn invalid_state_exposes_source() {
        let source = "abc".parse::<u32>().unwrap_err();

        let error = Error::InvalidState {
            token: "abc".to_string(),
            source,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("'abc'"));
    }

    #[test]
    fn empty_has_no_source() {
        assert!(Error::Empty.source().is_none());
    }
}
