/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Utility functions shared across the crate
//!
//! This module provides the numeric constants, the error type of the
//! special-function code and the gamma-function helpers.

pub mod constants;
pub mod errors;
pub mod math;

pub use errors::{NumericError, Result};
pub use math::{ln_gamma, temme_gammas, TemmeGammas};

/// Acceptance rule for a computed value against a reference value
///
/// Relative error is used when |expected| ≥ [`constants::ABSOLUTE_ERROR_THRESHOLD`],
/// absolute error otherwise.
///
/// # Arguments
///
/// * `result` - The computed value
/// * `expected` - The reference value
/// * `tolerance` - The accepted error
///
/// # Returns
///
/// The error measure and whether it is below `tolerance`
pub fn acceptance_error(
    result: num_complex::Complex64,
    expected: num_complex::Complex64,
    tolerance: f64,
) -> (f64, bool) {
    let magnitude = expected.norm();
    let error = if magnitude >= constants::ABSOLUTE_ERROR_THRESHOLD {
        (result - expected).norm() / magnitude
    } else {
        (result - expected).norm()
    };
    (error, error < tolerance)
}
