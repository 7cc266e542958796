/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Error types for the Mie module

use crate::utils::errors::NumericError;
use thiserror::Error;

/// Result type for Mie calculations
pub type Result<T> = std::result::Result<T, MieError>;

/// Mie-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MieError {
    /// Error when the size parameter, refractive index or truncation is invalid
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error raised by the Bessel engine
    #[error("Bessel evaluation failed: {0}")]
    Numeric(#[from] NumericError),
}
