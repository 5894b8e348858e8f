//! Serial (digram) test.
//!
//! Counts the transitions between consecutive symbols and checks that every
//! observed transition class occurs about equally often. The expected count
//! per class is the mean of the observed counts, not a fixed 1/4 share, so
//! classes that never occur do not contribute.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, warn};
use serde::Serialize;

use crate::distribution::chi_square;
use crate::error::{Error, Result};

/// Outcome of [`serial_test`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerialTest {
    pub chi: f64,
    pub p: f64,
    /// Distinct digram classes observed.
    #[serde(skip_serializing)]
    pub digrams: usize,
}

/// Count each ordered pair `(sequence[i + 1], sequence[i])`.
pub fn digram_counts<T: Eq + Hash>(sequence: &[T]) -> HashMap<(&T, &T), usize> {
    let mut counts = HashMap::new();
    for pair in sequence.windows(2) {
        *counts.entry((&pair[1], &pair[0])).or_insert(0) += 1;
    }
    counts
}

/// Chi-square test of the digram frequencies.
pub fn serial_test<T: Eq + Hash>(sequence: &[T]) -> Result<SerialTest> {
    let len = sequence.len();
    if len < 2 {
        warn!("serial test: sequence of length {len} rejected");
        return Err(Error::TooShort {
            needed: 2,
            got: len,
        });
    }

    let counts = digram_counts(sequence);
    let digrams = counts.len();
    debug!("serial test: {} digrams in {digrams} classes", len - 1);
    if digrams < 2 {
        warn!("serial test: only {digrams} digram class observed");
        return Err(Error::TooFewCategories { got: digrams });
    }

    // Every class has the same expectation, so only the multiset of counts
    // matters. Sorting fixes the summation order across calls.
    let mut sorted: Vec<usize> = counts.into_values().collect();
    sorted.sort_unstable();
    let observed: Vec<f64> = sorted.into_iter().map(|c| c as f64).collect();
    let mean = observed.iter().sum::<f64>() / digrams as f64;
    let expected = vec![mean; digrams];

    let fit = chi_square(&observed, &expected)?;
    Ok(SerialTest {
        chi: fit.statistic,
        p: fit.p,
        digrams,
    })
}
