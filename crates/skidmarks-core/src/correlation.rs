//! Lag-1 autocorrelation.

use log::{debug, warn};
use serde::Serialize;

use crate::distribution::{linear_regression, pearson};
use crate::error::{Error, Result};
use crate::sequence::{Bit, to_bits};

/// Smallest sequence that leaves the regression one degree of freedom.
pub const MIN_AUTOCORRELATION_LEN: usize = 4;

/// Regression statistics of `sequence[1..]` against `sequence[..n-1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoCorrelation {
    pub slope: f64,
    pub intercept: f64,
    #[serde(rename = "r-squared")]
    pub r_squared: f64,
    /// Two-sided p-value of the slope against zero.
    pub p: f64,
    /// Standard error of the slope estimate.
    pub see: f64,
    /// Pearson correlation between the lag-0 and lag-1 columns.
    pub auto_correlation: f64,
}

/// Test for correlation between each symbol and its predecessor.
///
/// A large `auto_correlation` with a small `p` means the next symbol is
/// predictable from the current one.
pub fn auto_correlation<T: Bit>(sequence: &[T]) -> Result<AutoCorrelation> {
    let len = sequence.len();
    if len < MIN_AUTOCORRELATION_LEN {
        warn!("autocorrelation: sequence of length {len} rejected");
        return Err(Error::TooShort {
            needed: MIN_AUTOCORRELATION_LEN,
            got: len,
        });
    }
    let values: Vec<f64> = to_bits(sequence)?.into_iter().map(f64::from).collect();
    let current = &values[1..];
    let previous = &values[..len - 1];

    let reg = linear_regression(current, previous)?;
    let auto_correlation = pearson(current, previous)?;
    debug!(
        "autocorrelation: slope={:.6} r={:.6} p={:.6}",
        reg.slope, reg.r, reg.p
    );

    Ok(AutoCorrelation {
        slope: reg.slope,
        intercept: reg.intercept,
        r_squared: reg.r * reg.r,
        p: reg.p,
        see: reg.stderr,
        auto_correlation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;

    #[test]
    fn test_blocky_sequence_is_correlated() {
        let r = auto_correlation(&Sequence::from("00000001111111111100000000")).unwrap();
        assert!(r.p < 0.05);
        assert!((r.auto_correlation - 0.837_662_337_662_337_6).abs() < 1e-6);
        assert!((r.slope - 0.837_662_337_662_337_6).abs() < 1e-9);
        assert!((r.intercept - 0.071_428_571_428_571_4).abs() < 1e-9);
        assert!((r.r_squared - 0.701_678_191_937_932).abs() < 1e-9);
        assert!((r.see - 0.113_888_161_781_648_57).abs() < 1e-9);
    }

    #[test]
    fn test_alternating_is_anticorrelated() {
        let r = auto_correlation(&[1u8, 0, 1, 0, 1, 0, 1, 0]).unwrap();
        assert!((r.auto_correlation + 1.0).abs() < 1e-12);
        assert!(r.p < 0.001);
    }

    #[test]
    fn test_non_binary_rejected() {
        assert_eq!(
            auto_correlation(&Sequence::from("0102")),
            Err(Error::NotBinary { index: 3 })
        );
    }

    #[test]
    fn test_short_rejected() {
        assert_eq!(
            auto_correlation(&Sequence::from("010")),
            Err(Error::TooShort { needed: 4, got: 3 })
        );
    }

    #[test]
    fn test_constant_rejected() {
        assert!(matches!(
            auto_correlation(&[0u8; 10]),
            Err(Error::DegenerateRegression(_))
        ));
    }

    #[test]
    fn test_constant_lag_column_rejected() {
        // current = [0, 0, 1] varies, previous = [0, 0, 0] does not.
        assert_eq!(
            auto_correlation(&Sequence::from("0001")),
            Err(Error::DegenerateRegression(
                "correlation of a constant column is undefined"
            ))
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let r = auto_correlation(&Sequence::from("0011001101")).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        for key in ["slope", "intercept", "r-squared", "p", "see", "auto_correlation"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
