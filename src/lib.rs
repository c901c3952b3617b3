//! Scalar probability density evaluators.
//!
//! This crate hosts closed-form density math for a small set of
//! distributions:
//! - per-distribution modules (`pdf`/`logpdf`/`nll`)
//! - flat wrapper helpers in [`distributions`]
//!
//! Everything is a pure function over `f64`: no state, no I/O, safe to call
//! from any thread. Parameter violations (`sigma <= 0`, `rate <= 0`,
//! `b <= a`, non-finite parameters) are [`Error::InvalidParameter`]; a query
//! outside a distribution's support is a legitimate zero density, never an
//! error.

pub mod distributions;
pub mod error;
pub mod exponential;
pub mod normal;
pub mod uniform;

pub use error::{Error, Result};
