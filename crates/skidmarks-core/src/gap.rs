//! Gap test.
//!
//! Measures the distance between successive occurrences of one designated
//! item and compares the distribution of those gap lengths against a
//! geometric model calibrated from the item's empirical frequency.

use log::{debug, warn};
use serde::Serialize;

use crate::distribution::chi_square;
use crate::error::{Error, Result};
use crate::sequence::runs;

/// The gap histogram never has fewer buckets than this.
pub const MIN_GAP_BUCKETS: usize = 10;

/// Outcome of [`gap_test`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapTest<T> {
    pub chi: f64,
    pub p: f64,
    /// The item whose gaps were measured.
    pub item: T,
    /// `observed[i]` is the number of gaps of length exactly `i`.
    #[serde(skip_serializing)]
    pub observed: Vec<usize>,
    /// `expected[i] = len * p_hit^(i + 1)`.
    #[serde(skip_serializing)]
    pub expected: Vec<f64>,
}

/// Lengths of the maximal runs of non-item symbols, in order.
pub fn gap_lengths(hits: &[bool]) -> Vec<usize> {
    runs(hits)
        .into_iter()
        .filter(|run| !run.value)
        .map(|run| run.length)
        .collect()
}

/// Histogram of gap lengths over `max(MIN_GAP_BUCKETS, longest gap)` buckets.
///
/// Bucket indices run from 0 up to, but excluding, the bucket count, so when
/// the longest gap sets the count that gap itself falls outside the
/// histogram.
pub fn gap_histogram(gaps: &[usize]) -> Vec<usize> {
    let longest = gaps.iter().copied().max().unwrap_or(0);
    let mut histogram = vec![0; MIN_GAP_BUCKETS.max(longest)];
    for &gap in gaps {
        if let Some(bucket) = histogram.get_mut(gap) {
            *bucket += 1;
        }
    }
    histogram
}

/// Run the gap test for `item`, which defaults to the first symbol.
///
/// The item must occur at least once and must not fill the whole sequence.
pub fn gap_test<T: PartialEq + Clone>(sequence: &[T], item: Option<&T>) -> Result<GapTest<T>> {
    let len = sequence.len();
    if len < 2 {
        warn!("gap test: sequence of length {len} rejected");
        return Err(Error::TooShort {
            needed: 2,
            got: len,
        });
    }
    let item = item.unwrap_or(&sequence[0]).clone();

    let hits: Vec<bool> = sequence.iter().map(|s| *s == item).collect();
    let occurrences = hits.iter().filter(|&&h| h).count();
    if occurrences == 0 || occurrences == len {
        warn!("gap test: item occurs {occurrences} times in {len} symbols");
        return Err(Error::ItemCoverage { occurrences, len });
    }

    let gaps = gap_lengths(&hits);
    let observed = gap_histogram(&gaps);

    let n = len as f64;
    let p_hit = occurrences as f64 / n;
    let expected: Vec<f64> = (1..=observed.len())
        .map(|i| n * p_hit.powi(i as i32))
        .collect();
    debug!(
        "gap test: {} gaps, p_hit={p_hit:.4}, histogram={observed:?}",
        gaps.len()
    );

    let observed_f: Vec<f64> = observed.iter().map(|&c| c as f64).collect();
    let fit = chi_square(&observed_f, &expected)?;
    Ok(GapTest {
        chi: fit.statistic,
        p: fit.p,
        item,
        observed,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;

    #[test]
    fn test_gap_lengths() {
        let hits: Vec<bool> = "1000110100".chars().map(|c| c == '1').collect();
        assert_eq!(gap_lengths(&hits), vec![3, 1, 2]);
    }

    #[test]
    fn test_histogram_minimum_buckets() {
        let h = gap_histogram(&[1, 1, 3]);
        assert_eq!(h.len(), MIN_GAP_BUCKETS);
        assert_eq!(h[0], 0);
        assert_eq!(h[1], 2);
        assert_eq!(h[3], 1);
    }

    #[test]
    fn test_histogram_grows_with_longest_gap() {
        let h = gap_histogram(&[2, 14]);
        assert_eq!(h.len(), 14);
        assert_eq!(h[2], 1);
        assert_eq!(h.iter().sum::<usize>(), 1);
    }

    #[test]
    fn test_clustered_item() {
        let r = gap_test(&Sequence::from("100020001200000"), None).unwrap();
        assert_eq!(r.item, '1');
        assert_eq!(r.observed, vec![0, 0, 0, 0, 0, 0, 1, 1, 0, 0]);
        assert!((r.chi - 756_406.999_098_553_8).abs() / 756_406.999 < 1e-9);
        assert!(r.p < 1e-12);
    }

    #[test]
    fn test_default_item_is_first_symbol() {
        let seq = Sequence::from("101010111101000");
        let default = gap_test(&seq, None).unwrap();
        let explicit = gap_test(&seq, Some(&'1')).unwrap();
        assert_eq!(default, explicit);
        assert!((default.chi - 11.684_911_193_438_811).abs() < 1e-4);
        assert!((default.p - 0.231_660_891_186_744_66).abs() < 1e-4);
    }

    #[test]
    fn test_explicit_item() {
        let r = gap_test(&Sequence::from("101010111101000"), Some(&'0')).unwrap();
        assert_eq!(r.item, '0');
        assert!((r.chi - 11.028_667_632_612_191).abs() < 1e-4);
        assert!((r.p - 0.273_749_035_097_325_23).abs() < 1e-4);
        assert!((r.expected[0] - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_item_coverage() {
        let seq = Sequence::from("1111");
        assert_eq!(
            gap_test(&seq, None),
            Err(Error::ItemCoverage {
                occurrences: 4,
                len: 4
            })
        );
        assert_eq!(
            gap_test(&seq, Some(&'0')),
            Err(Error::ItemCoverage {
                occurrences: 0,
                len: 4
            })
        );
    }

    #[test]
    fn test_single_hit_with_underflowing_tail() {
        let seq = Sequence::from(format!("1{}", "0".repeat(199)));
        let r = gap_test(&seq, None).unwrap();
        assert_eq!(r.observed.len(), 199);
        assert!(r.expected.iter().any(|&e| e == 0.0));
        // The only gap (199) sits just past the last bucket.
        assert_eq!(r.observed.iter().sum::<usize>(), 0);
        assert!((r.chi - 1.005_025_125_628_140_4).abs() < 1e-9);
        assert!(r.p.is_finite());
    }

    #[test]
    fn test_gap_in_underflowed_bucket_is_infinite() {
        let seq = Sequence::from(format!("1{}1{}", "0".repeat(200), "0".repeat(210)));
        let r = gap_test(&seq, None).unwrap();
        assert_eq!(r.observed[200], 1);
        assert_eq!(r.expected[200], 0.0);
        assert!(r.chi.is_infinite());
        assert_eq!(r.p, 0.0);
    }

    #[test]
    fn test_item_echoed_in_json() {
        let r = gap_test(&[3u8, 1, 3, 1, 1, 3], Some(&3)).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["item"], 3);
        assert!(json.get("chi").is_some());
        assert!(json.get("observed").is_none());
    }
}
