//! # skidmarks-core
//!
//! **Check for runs in a sequence: look for skid marks.**
//!
//! A small battery of randomness tests for finite sequences over a two-valued
//! alphabet. Each test is a standalone pure function that takes a slice and
//! returns a result record, or an [`Error`] when the input cannot be scored.
//!
//! | Test | Function | Detects |
//! |---|---|---|
//! | Wald-Wolfowitz runs | [`wald_wolfowitz`] | clustering, alternation |
//! | Lag-1 autocorrelation | [`auto_correlation`] | dependence on the previous symbol |
//! | Serial (digram) | [`serial_test`] | uneven transitions |
//! | Gap | [`gap_test`] | irregular spacing of one item |
//!
//! ## Quick Start
//!
//! ```
//! use skidmarks_core::{Sequence, gap_test, serial_test, wald_wolfowitz};
//!
//! let seq = Sequence::from("1000001");
//! let runs = wald_wolfowitz(&seq).unwrap();
//! assert_eq!(runs.n_runs, 3);
//!
//! let serial = serial_test(&Sequence::from("101010101111000")).unwrap();
//! assert!((serial.chi - 1.4286).abs() < 1e-4);
//!
//! // Gaps between '0's instead of the default first symbol.
//! let gaps = gap_test(&Sequence::from("101010111101000"), Some(&'0')).unwrap();
//! assert_eq!(gaps.item, '0');
//! ```
//!
//! Strings become one symbol per `char`; vectors, arrays and slices of any
//! comparable type work as well. The autocorrelation test additionally needs
//! symbols with a 0/1 value (see [`Bit`]).

pub mod correlation;
pub mod distribution;
pub mod error;
pub mod gap;
pub mod runs;
pub mod sequence;
pub mod serial;

pub use correlation::{AutoCorrelation, MIN_AUTOCORRELATION_LEN, auto_correlation};
pub use error::{Error, Result};
pub use gap::{GapTest, MIN_GAP_BUCKETS, gap_histogram, gap_lengths, gap_test};
pub use runs::{RunsTest, wald_wolfowitz};
pub use sequence::{Bit, Run, Sequence, count_runs, flatten_runs, runs, to_bits};
pub use serial::{SerialTest, digram_counts, serial_test};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
