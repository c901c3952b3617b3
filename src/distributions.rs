//! Flat density helpers for the supported distributions.
//!
//! This module intentionally provides "one-liner" wrappers in terms of the
//! canonical per-distribution modules in this crate.

use crate::Result;

/// PDF of Normal `N(mu, sigma)` at `x`.
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    crate::normal::pdf(x, mu, sigma)
}

/// PDF of Exponential with rate `rate` at `x`.
pub fn exponential_pdf(x: f64, rate: f64) -> Result<f64> {
    crate::exponential::pdf(x, rate)
}

/// PDF of Uniform on `[a, b]` at `x`.
pub fn uniform_pdf(x: f64, a: f64, b: f64) -> Result<f64> {
    crate::uniform::pdf(x, a, b)
}

/// Log-PDF of Normal `N(mu, sigma)` at `x`.
pub fn normal_logpdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    crate::normal::logpdf(x, mu, sigma)
}

/// Log-PDF of Exponential with rate `rate` at `x`.
pub fn exponential_logpdf(x: f64, rate: f64) -> Result<f64> {
    crate::exponential::logpdf(x, rate)
}

/// Log-PDF of Uniform on `[a, b]` at `x`.
pub fn uniform_logpdf(x: f64, a: f64, b: f64) -> Result<f64> {
    crate::uniform::logpdf(x, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrappers_match_modules() {
        let p = normal_pdf(0.3, 0.0, 1.0).unwrap();
        assert_relative_eq!(p, crate::normal::pdf(0.3, 0.0, 1.0).unwrap(), epsilon = 1e-15);

        let p = exponential_pdf(0.3, 2.0).unwrap();
        assert_relative_eq!(p, crate::exponential::pdf(0.3, 2.0).unwrap(), epsilon = 1e-15);

        let p = uniform_pdf(0.3, 0.0, 1.0).unwrap();
        assert_relative_eq!(p, crate::uniform::pdf(0.3, 0.0, 1.0).unwrap(), epsilon = 1e-15);
    }

    #[test]
    fn test_pdf_is_exp_of_logpdf() {
        let x = 0.7;
        assert_relative_eq!(
            normal_pdf(x, 0.0, 1.3).unwrap(),
            normal_logpdf(x, 0.0, 1.3).unwrap().exp(),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            exponential_pdf(x, 1.5).unwrap(),
            exponential_logpdf(x, 1.5).unwrap().exp(),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            uniform_pdf(x, 0.0, 2.0).unwrap(),
            uniform_logpdf(x, 0.0, 2.0).unwrap().exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_wrappers_propagate_invalid_params() {
        assert!(normal_pdf(1.0, 0.0, -1.0).is_err());
        assert!(exponential_pdf(2.0, -3.0).is_err());
        assert!(uniform_pdf(1.0, 2.0, 1.0).is_err());
    }
}
