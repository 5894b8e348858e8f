pub mod run;

use std::io::Read;

use skidmarks_core::Sequence;

/// The four tests the CLI can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestKind {
    Runs,
    Autocorr,
    Serial,
    Gap,
}

impl TestKind {
    pub const ALL: &'static [TestKind] = &[
        TestKind::Runs,
        TestKind::Autocorr,
        TestKind::Serial,
        TestKind::Gap,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TestKind::Runs => "Wald-Wolfowitz Runs",
            TestKind::Autocorr => "Autocorrelation",
            TestKind::Serial => "Serial (Digram)",
            TestKind::Gap => "Gap",
        }
    }

    /// Key used in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            TestKind::Runs => "wald_wolfowitz",
            TestKind::Autocorr => "auto_correlation",
            TestKind::Serial => "serial_test",
            TestKind::Gap => "gap_test",
        }
    }
}

/// Normalize user input into a symbol sequence.
///
/// Whitespace and commas are separators, so `1,0,1`, `1 0 1` and `101` are
/// the same sequence. Reads stdin when no argument is given.
pub fn read_sequence(arg: Option<&str>) -> Result<Sequence<char>, String> {
    let raw = match arg {
        Some(s) => s.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            buf
        }
    };
    let seq: Sequence<char> = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if seq.is_empty() {
        return Err("No symbols provided".to_string());
    }
    Ok(seq)
}

/// Letter grade for a p-value.
///
/// - A: p >= 0.1
/// - B: p >= 0.01
/// - C: p >= 0.001
/// - D: p >= 0.0001
/// - F: otherwise
pub fn grade_from_p(p: f64) -> char {
    match p {
        p if p >= 0.1 => 'A',
        p if p >= 0.01 => 'B',
        p if p >= 0.001 => 'C',
        p if p >= 0.0001 => 'D',
        _ => 'F',
    }
}

/// `random` when the test fails to reject at level `alpha`.
pub fn verdict(p: f64, alpha: f64) -> &'static str {
    if p >= alpha { "random" } else { "non-random" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sequence_strips_separators() {
        let seq = read_sequence(Some("1, 0 1\n1")).unwrap();
        assert_eq!(seq.as_slice(), &['1', '0', '1', '1']);
        assert!(read_sequence(Some(" ,\n")).is_err());
    }

    #[test]
    fn test_grade_from_p() {
        assert_eq!(grade_from_p(0.5), 'A');
        assert_eq!(grade_from_p(0.05), 'B');
        assert_eq!(grade_from_p(0.005), 'C');
        assert_eq!(grade_from_p(0.0005), 'D');
        assert_eq!(grade_from_p(0.0), 'F');
    }

    #[test]
    fn test_verdict() {
        assert_eq!(verdict(0.2, 0.05), "random");
        assert_eq!(verdict(0.01, 0.05), "non-random");
    }
}
