//! Exponential distribution density.

use crate::{Error, Result};

/// Log-PDF of an Exponential distribution at `x` with rate `rate`.
///
/// Support: `x >= 0`. Below the support the log-density is `-inf`.
pub fn logpdf(x: f64, rate: f64) -> Result<f64> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "rate must be finite and > 0, got {}",
            rate
        )));
    }
    if x < 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(rate.ln() - rate * x)
}

/// PDF of an Exponential distribution at `x` with rate `rate`.
///
/// `p(x) = rate * exp(-rate*x)` for `x >= 0`, zero below the support.
pub fn pdf(x: f64, rate: f64) -> Result<f64> {
    Ok(logpdf(x, rate)?.exp())
}

/// Negative log-likelihood of an Exponential distribution at `x`.
pub fn nll(x: f64, rate: f64) -> Result<f64> {
    Ok(-logpdf(x, rate)?)
}
