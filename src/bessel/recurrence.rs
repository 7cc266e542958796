/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Three-term recurrences in the order
//!
//! Every cylinder function satisfies C_{ν-1}(z) + C_{ν+1}(z) = (2ν/z) C_ν(z).
//! J is the minimal solution as the order grows, so it is recurred
//! downwards (Miller's algorithm) from a CF1 ratio; the dominant Hankel
//! function is recurred upwards. Both directions keep their two running
//! values on a shared binary exponent.

use super::series::budget_exceeded;
use crate::complex::{checked_div, ldexp_complex, ScaledComplex};
use crate::utils::constants::{EPSILON, RESCALE_EXPONENT, TINY};
use crate::utils::errors::{NumericError, Result};
use num_complex::Complex64;

/// Two consecutive values of a recurrence, `value · 2^exponent`
#[derive(Debug, Clone, Copy)]
pub struct RecurrenceState {
    /// The value one step behind
    pub previous: Complex64,
    /// The most recent value
    pub current: Complex64,
    /// Binary exponent shared by both values
    pub exponent: i64,
}

impl RecurrenceState {
    /// Start from two scaled values, aligned on the larger exponent
    pub fn from_scaled(previous: ScaledComplex, current: ScaledComplex) -> Self {
        let exponent = previous.exponent().max(current.exponent());
        Self {
            previous: previous.mantissa_at(exponent),
            current: current.mantissa_at(exponent),
            exponent,
        }
    }

    /// Advance one step: next = factor · current - previous
    ///
    /// The binary exponent of `factor` is moved into the shared exponent, so
    /// no product leaves the f64 range.
    pub fn advance(&mut self, factor: ScaledComplex) {
        let k = factor.exponent();
        let next = self.current * factor.mantissa() - ldexp_complex(self.previous, -k);
        self.previous = ldexp_complex(self.current, -k);
        self.current = next;
        self.exponent += k;
        self.rebalance();
    }

    fn rebalance(&mut self) {
        let largest = self
            .current
            .re
            .abs()
            .max(self.current.im.abs())
            .max(self.previous.re.abs())
            .max(self.previous.im.abs());
        if largest == 0.0 || !largest.is_finite() {
            return;
        }
        let e = largest.log2().floor() as i64;
        if e.abs() > RESCALE_EXPONENT as i64 {
            self.previous = ldexp_complex(self.previous, -e);
            self.current = ldexp_complex(self.current, -e);
            self.exponent += e;
        }
    }

    /// Whether both running values are finite
    pub fn is_finite(&self) -> bool {
        self.previous.re.is_finite()
            && self.previous.im.is_finite()
            && self.current.re.is_finite()
            && self.current.im.is_finite()
    }

    /// The two values as (previous, current) in scaled form
    pub fn into_scaled(self) -> (ScaledComplex, ScaledComplex) {
        (
            ScaledComplex::new(self.previous, self.exponent),
            ScaledComplex::new(self.current, self.exponent),
        )
    }
}

/// 2·order / z in scaled form
fn recurrence_factor(order: f64, inv_z: ScaledComplex) -> ScaledComplex {
    inv_z * (2.0 * order)
}

/// J_{ν+1}(z) / J_ν(z) from the continued fraction CF1 (modified Lentz)
pub fn cf1_ratio(nu: f64, z: Complex64, max_iterations: usize) -> Result<Complex64> {
    let tiny = Complex64::new(TINY, 0.0);
    let inv_z = checked_div(Complex64::new(1.0, 0.0), z)?;

    let mut f = tiny;
    let mut c = f;
    let mut d = Complex64::new(0.0, 0.0);

    for j in 1..=max_iterations {
        let a = if j == 1 { 1.0 } else { -1.0 };
        let b = inv_z * (2.0 * (nu + j as f64));

        d = b + d * a;
        if d.norm() < TINY {
            d = tiny;
        }
        c = b + checked_div(Complex64::new(a, 0.0), c)?;
        if c.norm() < TINY {
            c = tiny;
        }
        d = checked_div(Complex64::new(1.0, 0.0), d)?;
        let delta = c * d;
        f *= delta;
        if (delta - 1.0).norm() < EPSILON {
            return Ok(f);
        }
    }

    Err(budget_exceeded("continued fraction CF1", max_iterations))
}

/// J_ν(z) and J_{ν+1}(z) by Miller's backward recurrence
///
/// The recurrence starts at ν from the CF1 ratio with an arbitrary scale and
/// runs down to μ = ν - n. The unknown scale is fixed against whichever of
/// the reference values J_μ, J_{μ+1} is larger in magnitude.
///
/// # Arguments
///
/// * `mu` - The fractional order ν - n
/// * `n` - Number of downward steps
/// * `z` - The argument
/// * `j_mu` - J_μ(z)
/// * `j_mu1` - J_{μ+1}(z)
/// * `max_iterations` - Iteration budget
///
/// # Returns
///
/// The pair (J_ν(z), J_{ν+1}(z))
pub fn miller_j(
    mu: f64,
    n: usize,
    z: Complex64,
    j_mu: ScaledComplex,
    j_mu1: ScaledComplex,
    max_iterations: usize,
) -> Result<(ScaledComplex, ScaledComplex)> {
    if n > max_iterations {
        return Err(budget_exceeded("backward recurrence", max_iterations));
    }
    let nu = mu + n as f64;
    let ratio = cf1_ratio(nu, z, max_iterations)?;
    let inv_z = ScaledComplex::from(1.0).checked_div(&ScaledComplex::from(z))?;

    let mut state = RecurrenceState {
        previous: ratio,
        current: Complex64::new(1.0, 0.0),
        exponent: 0,
    };
    for k in (1..=n).rev() {
        state.advance(recurrence_factor(mu + k as f64, inv_z));
    }
    if !state.is_finite() {
        return Err(NumericError::NumericOverflow(format!(
            "backward recurrence left the f64 range: nu={}, z={}",
            nu, z
        )));
    }

    // Unscaled trial values u_{μ+1}, u_μ with u_ν = 1
    let (u_mu1, u_mu) = state.into_scaled();
    let scale = if j_mu.log2_abs() >= j_mu1.log2_abs() {
        j_mu.checked_div(&u_mu)?
    } else {
        j_mu1.checked_div(&u_mu1)?
    };

    Ok((scale, scale * ratio))
}

/// Forward recurrence of a Hankel function from orders μ, μ+1 to ν, ν+1
///
/// # Arguments
///
/// * `mu` - The seed order
/// * `n` - Number of upward steps, ν = μ + n
/// * `z` - The argument
/// * `h_mu` - H_μ(z)
/// * `h_mu1` - H_{μ+1}(z)
/// * `max_iterations` - Iteration budget
///
/// # Returns
///
/// The pair (H_ν(z), H_{ν+1}(z))
pub fn forward_hankel(
    mu: f64,
    n: usize,
    z: Complex64,
    h_mu: ScaledComplex,
    h_mu1: ScaledComplex,
    max_iterations: usize,
) -> Result<(ScaledComplex, ScaledComplex)> {
    if n > max_iterations {
        return Err(budget_exceeded("forward recurrence", max_iterations));
    }
    let inv_z = ScaledComplex::from(1.0).checked_div(&ScaledComplex::from(z))?;

    let mut state = RecurrenceState::from_scaled(h_mu, h_mu1);
    for k in 0..n {
        state.advance(recurrence_factor(mu + k as f64 + 1.0, inv_z));
    }
    if !state.is_finite() {
        return Err(NumericError::NumericOverflow(format!(
            "forward recurrence left the f64 range: nu={}, z={}",
            mu + n as f64,
            z
        )));
    }

    Ok(state.into_scaled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_cf1_half_order() {
        // J_{3/2}(x) / J_{1/2}(x) = 1/x - cot x
        let x: f64 = 2.5;
        let ratio = cf1_ratio(0.5, Complex64::new(x, 0.0), 10_000).unwrap();
        assert_relative_eq!(ratio.re, 1.0 / x - 1.0 / x.tan(), max_relative = 1e-13);
    }

    #[test]
    fn test_forward_recurrence_spherical() {
        // Spherical Hankel h_0 = -i e^{ix}/x, h_1 = -(x + i) e^{ix} / x²
        // H_{n+1/2}(x) = sqrt(2x/π) h_n(x)
        let x: f64 = 3.0;
        let z = Complex64::new(x, 0.0);
        let e = Complex64::new(0.0, x).exp();
        let scale = (2.0 * x / PI).sqrt();
        let h0 = -Complex64::i() * e / x * scale;
        let h1 = -(z + Complex64::i()) * e / (x * x) * scale;

        let (h4, h5) = forward_hankel(
            0.5,
            4,
            z,
            ScaledComplex::from(h0),
            ScaledComplex::from(h1),
            100,
        )
        .unwrap();

        // y_4(3) and y_5(3)
        let y4 = -0.918_348_794_725_068_2;
        let y5 = -2.247_023_328_465_390_3;
        assert_relative_eq!(h4.to_complex().unwrap().im, scale * y4, max_relative = 1e-12);
        assert_relative_eq!(h5.to_complex().unwrap().im, scale * y5, max_relative = 1e-12);
    }

    #[test]
    fn test_rescaling_keeps_values_finite() {
        // Y_ν(1) for ν ≈ 300 is far beyond f64
        let z = Complex64::new(1.0, 0.0);
        let (h, _) = forward_hankel(
            0.0,
            300,
            z,
            ScaledComplex::from(Complex64::new(0.765_197_686_557_966_6, 0.088_256_964_215_676_96)),
            ScaledComplex::from(Complex64::new(0.440_050_585_744_933_5, -0.781_212_821_300_288_7)),
            1000,
        )
        .unwrap();
        assert!(h.to_complex().is_none());
        assert!(h.log2_abs() > 1500.0);
    }
}
