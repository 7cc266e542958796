/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Series and continued fractions for small and moderate |z|
//!
//! * the ascending power series of J_ν(z)
//! * Temme's series for Y_μ(z) and Y_{μ+1}(z), |μ| ≤ ½, small |z|
//! * Steed's continued fraction for H⁽¹⁾'_μ(z) / H⁽¹⁾_μ(z), Im z ≥ 0

use crate::complex::{checked_div, principal_ln, ScaledComplex};
use crate::utils::constants::{EPSILON, TINY};
use crate::utils::errors::{NumericError, Result};
use crate::utils::math::{ln_gamma, temme_gammas};
use num_complex::Complex64;
use std::f64::consts::PI;

pub(crate) fn budget_exceeded(what: &str, max_iterations: usize) -> NumericError {
    NumericError::NumericOverflow(format!(
        "{} did not converge within {} iterations",
        what, max_iterations
    ))
}

/// J_ν(z) from the ascending power series
///
/// J_ν(z) = (z/2)^ν / Γ(ν+1) · Σ_k (-z²/4)^k / (k! (ν+1)_k)
///
/// # Arguments
///
/// * `nu` - The order (ν ≥ -½)
/// * `z` - The argument (z ≠ 0, Re z ≥ 0)
/// * `max_iterations` - Iteration budget of the sum
///
/// # Returns
///
/// J_ν(z) in scaled form
pub fn power_series_j(nu: f64, z: Complex64, max_iterations: usize) -> Result<ScaledComplex> {
    let log_prefactor = principal_ln(z * 0.5)? * nu - ln_gamma(nu + 1.0)?;
    let prefactor = ScaledComplex::exp(log_prefactor);

    let q = -(z * z) * 0.25;
    let mut term = Complex64::new(1.0, 0.0);
    let mut sum = term;

    for k in 1..=max_iterations {
        let kf = k as f64;
        term *= q / (kf * (nu + kf));
        sum += term;
        if term.norm() <= EPSILON * sum.norm() {
            return Ok(prefactor * sum);
        }
    }

    Err(budget_exceeded("power series of J", max_iterations))
}

/// Y_μ(z) and Y_{μ+1}(z) from Temme's series
///
/// # Arguments
///
/// * `mu` - The fractional order, |μ| ≤ ½
/// * `z` - The argument (z ≠ 0, Re z ≥ 0), intended for |z| ≤ 2
/// * `max_iterations` - Iteration budget of the sums
///
/// # Returns
///
/// The pair (Y_μ(z), Y_{μ+1}(z)) in scaled form
pub fn temme_neumann_pair(
    mu: f64,
    z: Complex64,
    max_iterations: usize,
) -> Result<(ScaledComplex, ScaledComplex)> {
    let x2 = z * 0.5;
    let pimu = PI * mu;
    let fact = if pimu.abs() < EPSILON {
        1.0
    } else {
        pimu / pimu.sin()
    };

    let d = -principal_ln(x2)?;
    let e = d * mu;
    let fact2 = if e.norm() < EPSILON {
        Complex64::new(1.0, 0.0)
    } else {
        e.sinh() / e
    };

    let gammas = temme_gammas(mu);
    let mut ff = (e.cosh() * gammas.gam1 + fact2 * d * gammas.gam2) * (2.0 / PI * fact);

    let e = e.exp();
    let mut p = e / (gammas.gampl * PI);
    let mut q = checked_div(Complex64::new(1.0, 0.0), e * (PI * gammas.gammi))?;

    let pimu2 = 0.5 * pimu;
    let fact3 = if pimu2.abs() < EPSILON {
        1.0
    } else {
        pimu2.sin() / pimu2
    };
    let r = PI * pimu2 * fact3 * fact3;

    let mut c = Complex64::new(1.0, 0.0);
    let d = -(x2 * x2);
    let mut sum = ff + q * r;
    let mut sum1 = p;

    let mu2 = mu * mu;
    let mut converged = false;
    for i in 1..=max_iterations {
        let fi = i as f64;
        ff = (ff * fi + p + q) / (fi * fi - mu2);
        c *= d / fi;
        p /= fi - mu;
        q /= fi + mu;
        let del = c * (ff + q * r);
        sum += del;
        let del1 = c * p - del * fi;
        sum1 += del1;
        if del.norm() <= EPSILON * sum.norm() && del1.norm() <= EPSILON * sum1.norm() {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(budget_exceeded("Temme series of Y", max_iterations));
    }

    let y_mu = ScaledComplex::from(-sum);
    let two_over_z = ScaledComplex::from(2.0).checked_div(&ScaledComplex::from(z))?;
    let y_mu1 = ScaledComplex::from(-sum1) * two_over_z;

    Ok((y_mu, y_mu1))
}

/// H⁽¹⁾'_μ(z) / H⁽¹⁾_μ(z) from Steed's continued fraction (modified Lentz)
///
/// Converges quickly for |z| ≳ 2; requires Im z ≥ 0.
pub fn steed_hankel_ratio(mu: f64, z: Complex64, max_iterations: usize) -> Result<Complex64> {
    let i = Complex64::i();
    let tiny = Complex64::new(TINY, 0.0);
    let mu2 = mu * mu;

    let mut f = i - checked_div(Complex64::new(0.5, 0.0), z)?;
    if f.norm() < TINY {
        f = tiny;
    }
    let mut c = f;
    let mut d = Complex64::new(0.0, 0.0);

    for k in 1..=max_iterations {
        let kf = k as f64;
        let a = if k == 1 {
            checked_div(i * (0.25 - mu2), z)?
        } else {
            Complex64::new((kf - 0.5) * (kf - 0.5) - mu2, 0.0)
        };
        let b = (z + i * kf) * 2.0;

        d = b + a * d;
        if d.norm() < TINY {
            d = tiny;
        }
        c = b + checked_div(a, c)?;
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

    Err(budget_exceeded("Steed's continued fraction", max_iterations))
}
