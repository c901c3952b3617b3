//! Normal distribution density.

use crate::{Error, Result};

/// Natural log of `sqrt(2π)`.
///
/// `ln(sqrt(2π)) = 0.5*ln(2π)` (precomputed to keep this crate const-friendly).
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Log-PDF of a Normal distribution `N(mu, sigma)` at `x`.
///
/// `log p(x) = -0.5 * ((x-mu)/sigma)^2 - ln(sigma) - ln(sqrt(2π))`
///
/// Support is all reals.
pub fn logpdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "sigma must be finite and > 0, got {}",
            sigma
        )));
    }
    let z = (x - mu) / sigma;
    Ok(-0.5 * z * z - sigma.ln() - LN_SQRT_2PI)
}

/// PDF of a Normal distribution `N(mu, sigma)` at `x`.
///
/// `p(x) = exp(-(x-mu)^2 / (2*sigma^2)) / (sigma*sqrt(2π))`
pub fn pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(logpdf(x, mu, sigma)?.exp())
}

/// Negative log-likelihood for a Normal distribution `N(mu, sigma)` at `x`.
pub fn nll(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(-logpdf(x, mu, sigma)?)
}
