//! Error type shared by every test in the battery.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the randomness tests.
///
/// Everything except [`Error::InvariantViolation`] and [`Error::Distribution`]
/// describes input the test cannot score. Those two indicate a numerical
/// problem inside the crate and should never be reachable with valid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("sequence too short: need at least {needed} symbols, got {got}")]
    TooShort { needed: usize, got: usize },

    #[error("sequence must contain both values, length >= 2")]
    Constant,

    #[error("sequence is not binary: unexpected symbol at index {index}")]
    NotBinary { index: usize },

    #[error("must have some values of item: found {occurrences} in {len} symbols")]
    ItemCoverage { occurrences: usize, len: usize },

    #[error("expected number of runs has zero variance")]
    DegenerateVariance,

    #[error("degenerate regression input: {0}")]
    DegenerateRegression(&'static str),

    #[error("chi-square needs at least 2 categories, got {got}")]
    TooFewCategories { got: usize },

    #[error("distribution error: {0}")]
    Distribution(String),

    #[error("runs variance {variance} disagrees with cross-check {cross_check}")]
    InvariantViolation { variance: f64, cross_check: f64 },
}

impl Error {
    /// True when the caller handed in a sequence the test cannot score,
    /// as opposed to a numerical failure inside the crate.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(
            self,
            Error::InvariantViolation { .. } | Error::Distribution(_)
        )
    }
}
