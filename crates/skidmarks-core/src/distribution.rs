//! Numeric collaborators: normal CDF, chi-square goodness of fit, simple
//! linear regression and Pearson correlation.
//!
//! The tests only depend on the contracts here (arrays in, statistic and
//! p-value out); the distributions themselves come from `statrs`.

use statrs::distribution::{ChiSquared, ContinuousCDF, Normal, StudentsT};

use crate::error::{Error, Result};

/// Keeps the t statistic finite when |r| == 1.
const TINY: f64 = 1.0e-20;

/// Probability that a standard normal variable is <= `z`.
pub fn normal_cdf(z: f64) -> f64 {
    Normal::standard().cdf(z)
}

/// Pearson chi-square statistic and its upper-tail p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquare {
    pub statistic: f64,
    pub p: f64,
    pub degrees_of_freedom: usize,
}

/// Goodness of fit of `observed` against `expected`, with `k - 1` degrees of
/// freedom.
///
/// The two totals are not required to agree. Expected counts must be
/// non-negative. A zero expectation (for example an underflowed geometric
/// tail) contributes nothing when its observed count is also zero and makes
/// the statistic infinite, with p = 0, when it is not.
pub fn chi_square(observed: &[f64], expected: &[f64]) -> Result<ChiSquare> {
    if observed.len() != expected.len() {
        return Err(Error::Distribution(format!(
            "observed has {} categories, expected has {}",
            observed.len(),
            expected.len()
        )));
    }
    let k = observed.len();
    if k < 2 {
        return Err(Error::TooFewCategories { got: k });
    }
    if expected.iter().any(|&e| e.is_nan() || e < 0.0) {
        return Err(Error::Distribution(
            "expected counts must be non-negative".to_string(),
        ));
    }

    let statistic: f64 = observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| match (o, e) {
            (o, e) if e == 0.0 && o == 0.0 => 0.0,
            (_, e) if e == 0.0 => f64::INFINITY,
            (o, e) => {
                let diff = o - e;
                diff * diff / e
            }
        })
        .sum();

    let degrees_of_freedom = k - 1;
    let dist = ChiSquared::new(degrees_of_freedom as f64)
        .map_err(|e| Error::Distribution(e.to_string()))?;
    let p = if statistic.is_infinite() {
        0.0
    } else {
        dist.sf(statistic)
    };
    Ok(ChiSquare {
        statistic,
        p,
        degrees_of_freedom,
    })
}

/// Least-squares fit of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Correlation coefficient, clipped to [-1, 1].
    pub r: f64,
    /// Two-sided p-value for a zero slope (Student t, n - 2 dof).
    pub p: f64,
    /// Standard error of the slope estimate.
    pub stderr: f64,
}

/// Population (biased) means and second moments of two equal-length columns.
struct Moments {
    x_mean: f64,
    y_mean: f64,
    sxx: f64,
    syy: f64,
    sxy: f64,
}

fn moments(x: &[f64], y: &[f64]) -> Moments {
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    Moments {
        x_mean,
        y_mean,
        sxx: sxx / n,
        syy: syy / n,
        sxy: sxy / n,
    }
}

/// Simple linear regression of `y` on `x`.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<Regression> {
    if x.len() != y.len() {
        return Err(Error::DegenerateRegression("columns differ in length"));
    }
    let n = x.len();
    if n < 3 {
        return Err(Error::DegenerateRegression(
            "need at least 3 points for a slope test",
        ));
    }
    let m = moments(x, y);
    if m.sxx == 0.0 {
        return Err(Error::DegenerateRegression("regressor is constant"));
    }

    let r_den = (m.sxx * m.syy).sqrt();
    let r = if r_den == 0.0 {
        0.0
    } else {
        (m.sxy / r_den).clamp(-1.0, 1.0)
    };

    let df = (n - 2) as f64;
    let t = r * (df / ((1.0 - r + TINY) * (1.0 + r + TINY))).sqrt();
    let students =
        StudentsT::new(0.0, 1.0, df).map_err(|e| Error::Distribution(e.to_string()))?;
    let p = 2.0 * students.sf(t.abs());

    let slope = m.sxy / m.sxx;
    let intercept = m.y_mean - slope * m.x_mean;
    let stderr = ((1.0 - r * r) * m.syy / m.sxx / df).sqrt();

    Ok(Regression {
        slope,
        intercept,
        r,
        p,
        stderr,
    })
}

/// Pearson correlation coefficient between two columns.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return Err(Error::DegenerateRegression(
            "correlation needs two columns of at least 2 values",
        ));
    }
    let m = moments(x, y);
    let den = (m.sxx * m.syy).sqrt();
    if den == 0.0 {
        return Err(Error::DegenerateRegression(
            "correlation of a constant column is undefined",
        ));
    }
    Ok(m.sxy / den)
}
