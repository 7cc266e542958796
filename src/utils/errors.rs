/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Error types shared by the arithmetic kernel and the Bessel engine

use thiserror::Error;

/// Errors raised while evaluating special functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    /// The input lies outside the analytic domain of the function
    /// (e.g. Y at the origin, division by zero)
    #[error("Domain error: {0}")]
    Domain(String),

    /// A series, continued fraction or recurrence did not converge within
    /// the iteration budget, or the result is outside the f64 range
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),
}

impl NumericError {
    /// Whether this error reports an input outside the function's domain
    pub fn is_domain(&self) -> bool {
        matches!(self, NumericError::Domain(_))
    }

    /// Whether this error reports numeric non-convergence or overflow
    pub fn is_overflow(&self) -> bool {
        matches!(self, NumericError::NumericOverflow(_))
    }
}

/// A specialized Result type for numeric operations
pub type Result<T> = std::result::Result<T, NumericError>;
