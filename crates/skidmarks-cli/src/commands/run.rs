use log::debug;
use serde_json::{Map, Value};
use skidmarks_core::{Sequence, auto_correlation, gap_test, serial_test, wald_wolfowitz};

use super::{TestKind, grade_from_p, read_sequence, verdict};

pub struct RunCommandConfig<'a> {
    pub kinds: &'a [TestKind],
    pub sequence: Option<&'a str>,
    pub item: Option<char>,
    pub json: bool,
    pub alpha: f64,
}

/// Run the selected tests and print them. Returns false if any test failed.
pub fn run(cfg: RunCommandConfig<'_>) -> bool {
    let seq = match read_sequence(cfg.sequence) {
        Ok(seq) => seq,
        Err(e) => {
            eprintln!("{e}");
            return false;
        }
    };
    debug!("running {} test(s) on {} symbols", cfg.kinds.len(), seq.len());

    let outcomes: Vec<(TestKind, Result<Value, String>)> = cfg
        .kinds
        .iter()
        .map(|&kind| (kind, execute(kind, &seq, cfg.item)))
        .collect();

    if cfg.json {
        print_json(&outcomes);
    } else {
        print_table(&outcomes, seq.len(), cfg.alpha);
    }
    outcomes.iter().all(|(_, outcome)| outcome.is_ok())
}

fn execute(kind: TestKind, seq: &Sequence<char>, item: Option<char>) -> Result<Value, String> {
    let value = match kind {
        TestKind::Runs => wald_wolfowitz(seq).map(serde_json::to_value),
        TestKind::Autocorr => auto_correlation(seq).map(serde_json::to_value),
        TestKind::Serial => serial_test(seq).map(serde_json::to_value),
        TestKind::Gap => gap_test(seq, item.as_ref()).map(serde_json::to_value),
    };
    match value {
        Ok(Ok(v)) => Ok(v),
        Ok(Err(e)) => Err(format!("serialization failed: {e}")),
        Err(e) => Err(e.to_string()),
    }
}

fn print_json(outcomes: &[(TestKind, Result<Value, String>)]) {
    let body = if let [(_, outcome)] = outcomes {
        entry(outcome)
    } else {
        let mut map = Map::new();
        for (kind, outcome) in outcomes {
            map.insert(kind.key().to_string(), entry(outcome));
        }
        Value::Object(map)
    };
    match serde_json::to_string_pretty(&body) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to serialize results: {e}"),
    }
}

fn entry(outcome: &Result<Value, String>) -> Value {
    match outcome {
        Ok(v) => v.clone(),
        Err(e) => serde_json::json!({ "error": e }),
    }
}

fn print_table(outcomes: &[(TestKind, Result<Value, String>)], len: usize, alpha: f64) {
    println!("Sequence of {len} symbols (alpha = {alpha})\n");
    println!(
        "{:<22} {:>10} {:>6}  {:<10}",
        "Test", "p", "Grade", "Verdict"
    );
    println!("{}", "-".repeat(52));

    for (kind, outcome) in outcomes {
        match outcome {
            Ok(v) => {
                let p = v.get("p").and_then(Value::as_f64).unwrap_or(f64::NAN);
                println!(
                    "{:<22} {:>10.6} {:>6}  {:<10}",
                    kind.title(),
                    p,
                    grade_from_p(p),
                    verdict(p, alpha)
                );
                println!("  {}", details(v));
            }
            Err(e) => {
                println!("{:<22} {:>10} {:>6}  error: {e}", kind.title(), "-", "-");
            }
        }
    }
}

/// `key=value` pairs for every field except `p`.
fn details(v: &Value) -> String {
    let Some(obj) = v.as_object() else {
        return String::new();
    };
    obj.iter()
        .filter(|(k, _)| k.as_str() != "p")
        .map(|(k, v)| match v {
            Value::Number(n) if n.is_f64() => format!("{k}={:.4}", n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => format!("{k}='{s}'"),
            other => format!("{k}={other}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_reports_errors() {
        let seq = Sequence::from("1111");
        let err = execute(TestKind::Runs, &seq, None).unwrap_err();
        assert!(err.contains("both values"));
    }

    #[test]
    fn test_execute_gap_uses_item() {
        let seq = Sequence::from("101010111101000");
        let v = execute(TestKind::Gap, &seq, Some('0')).unwrap();
        assert_eq!(v["item"], "0");
    }

    #[test]
    fn test_details_skips_p() {
        let v = serde_json::json!({ "chi": 1.5, "p": 0.2, "item": "1" });
        let d = details(&v);
        assert!(d.contains("chi=1.5000"));
        assert!(d.contains("item='1'"));
        assert!(!d.contains("p="));
    }
}
