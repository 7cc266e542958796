/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Mie scattering coefficients a_n and b_n
//!
//! The Riccati-Bessel functions ψ_n(ρ) = ρ j_n(ρ) and ξ_n(ρ) = ρ h⁽¹⁾_n(ρ)
//! are formed from the cylinder functions at half-integer order,
//! ψ_n(ρ) = sqrt(πρ/2) J_{n+½}(ρ), with derivatives from
//! f'_n(ρ) = f_{n-1}(ρ) - n f_n(ρ) / ρ.

use super::errors::{MieError, Result};
use crate::bessel::{BesselEngine, HankelKind};
use crate::complex::principal_sqrt;
use num_complex::Complex64;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Coefficients a_n, b_n for n = 1..=n_max
#[derive(Debug, Clone, PartialEq)]
pub struct MieCoefficients {
    /// Electric coefficients, `a[n - 1]` = a_n
    pub a: Vec<Complex64>,
    /// Magnetic coefficients, `b[n - 1]` = b_n
    pub b: Vec<Complex64>,
}

impl MieCoefficients {
    /// Truncation order of the series
    pub fn n_max(&self) -> usize {
        self.a.len()
    }
}

/// Wiscombe's truncation order round(x + 4x^{1/3} + 2)
pub fn wiscombe_order(x: f64) -> usize {
    (x + 4.0 * x.cbrt() + 2.0).round() as usize
}

/// Riccati-Bessel function and derivative at one order
#[derive(Debug, Clone, Copy)]
struct Riccati {
    value: Complex64,
    derivative: Complex64,
}

impl Riccati {
    /// Build f_n and f'_n from the cylinder values at n + ½ and n - ½
    fn new(n: usize, rho: Complex64, upper: Complex64, lower: Complex64) -> Self {
        let prefactor = principal_sqrt(rho * (0.5 * PI));
        let value = prefactor * upper;
        let previous = prefactor * lower;
        Self {
            value,
            derivative: previous - value * (n as f64) / rho,
        }
    }
}

/// Check the size parameter and relative refractive index
pub(crate) fn validate(x: f64, m: Complex64) -> Result<()> {
    if !(x > 0.0) || !x.is_finite() {
        return Err(MieError::InvalidParameter(format!(
            "size parameter must be positive and finite: {}",
            x
        )));
    }
    if !m.re.is_finite() || !m.im.is_finite() || (m.re == 0.0 && m.im == 0.0) {
        return Err(MieError::InvalidParameter(format!(
            "relative refractive index must be finite and non-zero: {}",
            m
        )));
    }
    Ok(())
}

/// Coefficients a_n and b_n of a homogeneous sphere
///
/// # Arguments
///
/// * `engine` - Bessel engine used for every cylinder function
/// * `x` - Size parameter 2π n_medium r / λ
/// * `m` - Refractive index of the sphere relative to the medium
/// * `n_max` - Truncation order
///
/// # Returns
///
/// The coefficients for n = 1..=n_max
pub fn mie_coefficients(
    engine: &BesselEngine,
    x: f64,
    m: Complex64,
    n_max: usize,
) -> Result<MieCoefficients> {
    validate(x, m)?;
    if n_max == 0 {
        return Err(MieError::InvalidParameter(
            "truncation order must be at least 1".to_string(),
        ));
    }

    let rho = Complex64::new(x, 0.0);
    let mx = m * x;

    let pairs = (1..=n_max)
        .into_par_iter()
        .map(|n| -> Result<(Complex64, Complex64)> {
            let order = n as f64 + 0.5;

            let outer = engine.evaluate(order, rho)?;
            let outer_prev = engine.evaluate(order - 1.0, rho)?;
            let psi = Riccati::new(n, rho, outer.j, outer_prev.j);
            let xi = Riccati::new(
                n,
                rho,
                outer.hankel(HankelKind::First),
                outer_prev.hankel(HankelKind::First),
            );

            let inner = Riccati::new(
                n,
                mx,
                engine.besselj(order, mx)?,
                engine.besselj(order - 1.0, mx)?,
            );

            let a = (m * inner.value * psi.derivative - psi.value * inner.derivative)
                / (m * inner.value * xi.derivative - xi.value * inner.derivative);
            let b = (inner.value * psi.derivative - m * psi.value * inner.derivative)
                / (inner.value * xi.derivative - m * xi.value * inner.derivative);

            Ok((a, b))
        })
        .collect::<Result<Vec<_>>>()?;

    let (a, b): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
    log::debug!("Mie coefficients for x={}, m={}: n_max={}", x, m, n_max);

    Ok(MieCoefficients { a, b })
}
