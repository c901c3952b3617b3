//! Error types for the density evaluators.

use thiserror::Error;

/// Library error type.
///
/// There is a single failure mode: a distribution parameter outside its
/// allowed domain. A query point outside a distribution's support is not
/// an error; it yields a zero density.
#[derive(Error, Debug)]
pub enum Error {
    /// A defining parameter violates its domain constraint.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
