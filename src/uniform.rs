//! Uniform distribution density.

use crate::{Error, Result};

/// Log-PDF of a Uniform distribution on `[a, b]` at `x`.
///
/// Bounds must be finite with `b > a`. Support: `a <= x <= b` (endpoints
/// included); outside the support the log-density is `-inf`.
pub fn logpdf(x: f64, a: f64, b: f64) -> Result<f64> {
    if !a.is_finite() || !b.is_finite() || b <= a {
        return Err(Error::InvalidParameter(format!(
            "bounds must be finite with b > a, got a={}, b={}",
            a, b
        )));
    }
    if x < a || x > b {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(-(b - a).ln())
}

/// PDF of a Uniform distribution on `[a, b]` at `x`.
///
/// `p(x) = 1/(b-a)` inside the support, zero outside.
pub fn pdf(x: f64, a: f64, b: f64) -> Result<f64> {
    Ok(logpdf(x, a, b)?.exp())
}

/// Negative log-likelihood for a Uniform distribution on `[a, b]` at `x`.
pub fn nll(x: f64, a: f64, b: f64) -> Result<f64> {
    Ok(-logpdf(x, a, b)?)
}
