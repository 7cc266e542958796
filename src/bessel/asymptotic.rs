/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Hankel's asymptotic expansion for large |z|
//!
//! H⁽¹'²⁾_ν(z) = sqrt(2/(πz)) e^{±iω} Σ_k (±i)^k a_k(ν) / z^k,
//! ω = z - (ν/2 + 1/4)π. The sum is cut at its smallest term.

use crate::complex::{checked_div, principal_sqrt, ScaledComplex};
use crate::utils::constants::EPSILON;
use crate::utils::errors::{NumericError, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Both Hankel functions at one order, in scaled form
#[derive(Debug, Clone, Copy)]
pub struct HankelPair {
    /// H⁽¹⁾_ν(z)
    pub first: ScaledComplex,
    /// H⁽²⁾_ν(z)
    pub second: ScaledComplex,
}

impl HankelPair {
    /// J_ν = (H⁽¹⁾ + H⁽²⁾) / 2
    pub fn bessel_j(&self) -> ScaledComplex {
        (self.first + self.second) * 0.5
    }

    /// Y_ν = (H⁽¹⁾ - H⁽²⁾) / (2i)
    pub fn bessel_y(&self) -> ScaledComplex {
        ((self.first - self.second) * 0.5).mul_neg_i()
    }

    /// The Hankel function that dominates for the sign of Im z:
    /// H⁽¹⁾ for Im z ≥ 0, H⁽²⁾ below
    pub fn dominant(&self, upper: bool) -> ScaledComplex {
        if upper {
            self.first
        } else {
            self.second
        }
    }
}

/// Evaluate H⁽¹⁾_ν(z) and H⁽²⁾_ν(z) from the asymptotic expansion
///
/// # Arguments
///
/// * `nu` - The order
/// * `z` - The argument, Re z ≥ 0 and |z| large compared with ν²
/// * `tolerance` - Largest relative size of the smallest term that is accepted
///   when the sum cannot reach machine precision
/// * `max_iterations` - Largest number of terms
///
/// # Returns
///
/// Both Hankel functions, or a numeric-overflow error if the series
/// diverges before reaching `tolerance`
pub fn hankel_expansion(
    nu: f64,
    z: Complex64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<HankelPair> {
    let i = Complex64::i();
    let mu4 = 4.0 * nu * nu;
    let inv_8z = checked_div(Complex64::new(0.125, 0.0), z)?;

    let mut term_plus = Complex64::new(1.0, 0.0);
    let mut term_minus = term_plus;
    let mut sum_plus = term_plus;
    let mut sum_minus = term_minus;
    let mut previous = f64::INFINITY;
    let mut converged = false;

    for k in 1..=max_iterations {
        let kf = k as f64;
        let odd = 2.0 * kf - 1.0;
        let factor = inv_8z * ((mu4 - odd * odd) / kf);
        term_plus *= factor * i;
        term_minus *= factor * -i;

        let size = term_plus.norm();
        if size > previous {
            break;
        }
        sum_plus += term_plus;
        sum_minus += term_minus;
        previous = size;
        if size <= EPSILON * sum_plus.norm().min(sum_minus.norm()) {
            converged = true;
            break;
        }
    }

    if !converged {
        let relative = previous / sum_plus.norm().min(sum_minus.norm());
        if !(relative <= tolerance) {
            return Err(NumericError::NumericOverflow(format!(
                "Hankel expansion diverges before reaching tolerance: nu={}, z={}, smallest term {:e}",
                nu, z, relative
            )));
        }
        log::debug!(
            "Hankel expansion truncated at relative term {:e} for nu={}, z={}",
            relative,
            nu,
            z
        );
    }

    let omega = z - (0.5 * nu + 0.25) * PI;
    let amplitude = principal_sqrt(checked_div(Complex64::new(2.0 / PI, 0.0), z)?);
    let first = ScaledComplex::exp(i * omega) * (amplitude * sum_plus);
    let second = ScaledComplex::exp(-i * omega) * (amplitude * sum_minus);

    Ok(HankelPair { first, second })
}
