/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Diagnostics of the Bessel engine
//!
//! Hard failures are [`NumericError`](crate::utils::errors::NumericError)s.
//! The warning below never turns a call into an error.

use num_complex::Complex64;
use thiserror::Error;

/// The Wronskian W{J_ν, Y_ν}(z) = 2/(πz) is not met to the configured tolerance
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Wronskian residual {residual:e} exceeds tolerance {tolerance:e} at nu={nu}, z={z}")]
pub struct PrecisionWarning {
    /// The order of the evaluation
    pub nu: f64,
    /// The argument of the evaluation
    pub z: Complex64,
    /// |J_ν Y_{ν+1} - J_{ν+1} Y_ν + 2/(πz)| relative to the largest term
    pub residual: f64,
    /// The configured tolerance
    pub tolerance: f64,
}
