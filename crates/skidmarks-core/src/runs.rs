//! Wald-Wolfowitz runs test.
//!
//! Counts the maximal runs in a two-valued sequence and compares that count
//! with its expectation given the number of symbols in each class. Too few
//! runs means clustering, too many means alternation.

use log::{debug, error, warn};
use serde::Serialize;

use crate::distribution::normal_cdf;
use crate::error::{Error, Result};
use crate::sequence::count_runs;

/// Maximum disagreement tolerated between the two variance formulas.
const VARIANCE_TOLERANCE: f64 = 0.001;

/// Outcome of [`wald_wolfowitz`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunsTest {
    /// Observed number of runs.
    pub n_runs: usize,
    /// Expected number of runs.
    pub mean: f64,
    /// Standard deviation of the number of runs.
    pub sd: f64,
    pub z: f64,
    /// Lower-tail normal probability of `z`.
    pub p: f64,
    /// Symbols equal to the first one.
    #[serde(skip_serializing)]
    pub n: usize,
    /// Symbols different from the first one.
    #[serde(skip_serializing)]
    pub m: usize,
}

/// Run the Wald-Wolfowitz runs test.
///
/// The two classes are "equal to `sequence[0]`" and "anything else"; the
/// sequence must contain exactly two distinct values.
pub fn wald_wolfowitz<T: PartialEq>(sequence: &[T]) -> Result<RunsTest> {
    let total = sequence.len();
    if total < 2 {
        warn!("runs test: sequence of length {total} rejected");
        return Err(Error::TooShort {
            needed: 2,
            got: total,
        });
    }
    check_two_valued(sequence)?;

    let first = &sequence[0];
    let n_count = sequence.iter().filter(|s| *s == first).count();
    let m_count = total - n_count;
    let n_runs = count_runs(sequence);
    debug!("runs test: n={n_count} m={m_count} runs={n_runs}");

    let n = n_count as f64;
    let m = m_count as f64;
    let nm2 = 2.0 * n * m;
    let len = n + m;

    let mean = nm2 / len + 1.0;
    let variance = nm2 * (nm2 - n - m) / (len * len * (len - 1.0));
    let cross_check = (mean - 1.0) * (mean - 2.0) / (len - 1.0);
    if (variance - cross_check).abs() > VARIANCE_TOLERANCE {
        error!("runs test: variance {variance} vs cross-check {cross_check}");
        return Err(Error::InvariantViolation {
            variance,
            cross_check,
        });
    }
    if variance <= 0.0 {
        warn!("runs test: zero variance for n={n_count} m={m_count}");
        return Err(Error::DegenerateVariance);
    }

    let sd = variance.sqrt();
    let z = (n_runs as f64 - mean) / sd;
    Ok(RunsTest {
        n_runs,
        mean,
        sd,
        z,
        p: normal_cdf(z),
        n: n_count,
        m: m_count,
    })
}

/// Require exactly two distinct values.
fn check_two_valued<T: PartialEq>(sequence: &[T]) -> Result<()> {
    let first = &sequence[0];
    let Some(second) = sequence.iter().find(|s| *s != first) else {
        warn!("runs test: constant sequence rejected");
        return Err(Error::Constant);
    };
    match sequence.iter().position(|s| s != first && s != second) {
        Some(index) => {
            warn!("runs test: third symbol at index {index}");
            Err(Error::NotBinary { index })
        }
        None => Ok(()),
    }
}
