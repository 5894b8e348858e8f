//! Input normalization and run-length grouping.
//!
//! Every test operates on a plain slice `&[T]`. [`Sequence`] is the adapter
//! at the boundary: it turns strings, vectors and slices into one owned,
//! immutable, indexable sequence that derefs to that slice.

use std::ops::Deref;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

/// An ordered, finite, immutable sequence of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence<T> {
    symbols: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new(symbols: Vec<T>) -> Self {
        Self { symbols }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.symbols
    }

    pub fn into_inner(self) -> Vec<T> {
        self.symbols
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.symbols
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.symbols
    }
}

/// One symbol per `char`, so `"1001"` and `"abba"` both work.
impl From<&str> for Sequence<char> {
    fn from(s: &str) -> Self {
        Self::new(s.chars().collect())
    }
}

impl From<String> for Sequence<char> {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(symbols: Vec<T>) -> Self {
        Self::new(symbols)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(symbols: &[T]) -> Self {
        Self::new(symbols.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(symbols: [T; N]) -> Self {
        Self::new(Vec::from(symbols))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

/// A maximal block of consecutive equal symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<T> {
    pub value: T,
    pub length: usize,
}

impl<T: Clone> Run<T> {
    /// Repeat `value` `length` times.
    pub fn expand(&self) -> impl Iterator<Item = T> + '_ {
        std::iter::repeat_n(self.value.clone(), self.length)
    }
}

/// Partition `sequence` into maximal runs, preserving order.
///
/// The run lengths always sum to `sequence.len()`; an empty input yields no
/// runs.
pub fn runs<T: PartialEq + Clone>(sequence: &[T]) -> Vec<Run<T>> {
    let mut out: Vec<Run<T>> = Vec::new();
    for symbol in sequence {
        match out.last_mut() {
            Some(run) if run.value == *symbol => run.length += 1,
            _ => out.push(Run {
                value: symbol.clone(),
                length: 1,
            }),
        }
    }
    out
}

/// Number of maximal runs, without materializing them.
pub fn count_runs<T: PartialEq>(sequence: &[T]) -> usize {
    if sequence.is_empty() {
        return 0;
    }
    1 + sequence.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Inverse of [`runs`].
pub fn flatten_runs<T: Clone>(runs: &[Run<T>]) -> Vec<T> {
    runs.iter().flat_map(Run::expand).collect()
}

// ---------------------------------------------------------------------------
// Binary symbols
// ---------------------------------------------------------------------------

/// Symbols that have a 0/1 integer representation.
pub trait Bit {
    /// `Some(0)` or `Some(1)`, or `None` if the symbol is not a bit.
    fn bit(&self) -> Option<u8>;
}

impl Bit for char {
    fn bit(&self) -> Option<u8> {
        match self {
            '0' => Some(0),
            '1' => Some(1),
            _ => None,
        }
    }
}

impl Bit for bool {
    fn bit(&self) -> Option<u8> {
        Some(u8::from(*self))
    }
}

macro_rules! impl_bit_for_int {
    ($($t:ty),*) => {
        $(
            impl Bit for $t {
                fn bit(&self) -> Option<u8> {
                    match *self {
                        0 => Some(0),
                        1 => Some(1),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_bit_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<B: Bit + ?Sized> Bit for &B {
    fn bit(&self) -> Option<u8> {
        (**self).bit()
    }
}

/// Coerce every symbol to 0/1, failing on the first one that is not a bit.
pub fn to_bits<T: Bit>(sequence: &[T]) -> Result<Vec<u8>> {
    sequence
        .iter()
        .enumerate()
        .map(|(index, s)| s.bit().ok_or(Error::NotBinary { index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_grouping() {
        let seq = Sequence::from("1100010");
        let r = runs(&seq);
        let pairs: Vec<(char, usize)> = r.iter().map(|r| (r.value, r.length)).collect();
        assert_eq!(pairs, vec![('1', 2), ('0', 3), ('1', 1), ('0', 1)]);
        assert_eq!(r.iter().map(|r| r.length).sum::<usize>(), seq.len());
    }

    #[test]
    fn test_runs_empty() {
        let empty: [u8; 0] = [];
        assert!(runs(&empty).is_empty());
        assert_eq!(count_runs(&empty), 0);
    }

    #[test]
    fn test_count_runs_matches_grouping() {
        let seq = Sequence::from("abaaabbba");
        assert_eq!(count_runs(&seq), runs(&seq).len());
        assert_eq!(count_runs(&seq), 5);
    }

    #[test]
    fn test_flatten_round_trip() {
        let seq = Sequence::from(vec![3, 3, 1, 2, 2, 2, 3]);
        assert_eq!(flatten_runs(&runs(&seq)), seq.into_inner());
    }

    #[test]
    fn test_sequence_adapters_agree() {
        let a = Sequence::from("101");
        let b = Sequence::from(vec!['1', '0', '1']);
        let c: Sequence<char> = "101".chars().collect();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(Sequence::from([1u8, 0]).as_slice(), &[1, 0]);
    }

    #[test]
    fn test_to_bits() {
        assert_eq!(to_bits(&Sequence::from("0110")).unwrap(), vec![0, 1, 1, 0]);
        assert_eq!(to_bits(&[true, false]).unwrap(), vec![1, 0]);
        assert_eq!(
            to_bits(&Sequence::from("01a1")),
            Err(Error::NotBinary { index: 2 })
        );
        assert_eq!(to_bits(&[0i32, 2]), Err(Error::NotBinary { index: 1 }));
    }
}
