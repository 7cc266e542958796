/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Bessel evaluation engine
//!
//! The engine reduces every request to order ν ≥ 0 and Re z ≥ 0, evaluates
//! J (and Y when needed) at ν and ν + 1 with the method chosen by
//! [`select_method`], and maps the result back through the reflection
//! formulas for negative order and the analytic continuation for Re z < 0.
//!
//! The Hankel function that is recessive in z (H⁽¹⁾ above the real axis,
//! H⁽²⁾ below) is carried through every step as computed and never formed
//! as J ± iY, which would cancel all of its digits.

use super::asymptotic::{hankel_expansion, HankelPair};
use super::config::{CutSide, EngineConfig};
use super::dispatch::{select_method, split_order, Method};
use super::errors::PrecisionWarning;
use super::hankel::HankelKind;
use super::recurrence::{forward_hankel, miller_j};
use super::series::{power_series_j, steed_hankel_ratio, temme_neumann_pair};
use crate::complex::{checked_div, cos_pi, exp_i_pi, sin_pi, ScaledComplex};
use crate::utils::constants::FRAC_2_PI;
use crate::utils::errors::{NumericError, Result};
use num_complex::Complex64;
use rayon::prelude::*;
use std::f64::consts::PI;

/// J_ν(z), Y_ν(z) and both Hankel functions from one evaluation
///
/// `h1` and `h2` agree with J + iY and J - iY up to rounding relative to
/// |J| + |Y|.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// J_ν(z)
    pub j: Complex64,
    /// Y_ν(z)
    pub y: Complex64,
    /// H⁽¹⁾_ν(z)
    pub h1: Complex64,
    /// H⁽²⁾_ν(z)
    pub h2: Complex64,
    /// Set when the Wronskian check failed
    pub warning: Option<PrecisionWarning>,
}

impl Evaluation {
    /// H⁽¹⁾_ν(z) or H⁽²⁾_ν(z)
    pub fn hankel(&self, kind: HankelKind) -> Complex64 {
        match kind {
            HankelKind::First => self.h1,
            HankelKind::Second => self.h2,
        }
    }
}

/// Values at ν and ν + 1 for ν ≥ 0, Re z ≥ 0
struct CoreValues {
    j: ScaledComplex,
    j_next: ScaledComplex,
    y: Option<(ScaledComplex, ScaledComplex)>,
    hankel: Option<HankelPair>,
}

impl CoreValues {
    /// Exactly real J and Y; on the real axis H = J ± iY loses nothing
    fn real(self) -> Self {
        let j = self.j.real();
        let y = self.y.map(|(y, y_next)| (y.real(), y_next.real()));
        Self {
            j,
            j_next: self.j_next.real(),
            y,
            hankel: y.map(|(y, _)| HankelPair {
                first: j + y.mul_i(),
                second: j + y.mul_neg_i(),
            }),
        }
    }
}

/// Seed values at μ and μ + 1; `h` is the Hankel function dominant for the
/// sign of Im z
struct Seeds {
    j_mu: ScaledComplex,
    j_mu1: ScaledComplex,
    h_mu: ScaledComplex,
    h_mu1: ScaledComplex,
}

/// J, Y and the Hankel functions at ν ≥ 0 for any z ≠ 0
struct Pair {
    j: ScaledComplex,
    y: ScaledComplex,
    hankel: HankelPair,
    residual: f64,
}

/// Evaluation engine for J_ν(z), Y_ν(z) and the Hankel functions
///
/// The engine holds only its configuration and can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct BesselEngine {
    config: EngineConfig,
}

impl BesselEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configuration of this engine
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Bessel function of the first kind J_ν(z)
    ///
    /// # Arguments
    ///
    /// * `nu` - The order, any finite real
    /// * `z` - The argument, any finite complex value
    ///
    /// # Returns
    ///
    /// J_ν(z), or an error for non-finite input, singular values at the
    /// origin and results outside the f64 range
    pub fn besselj(&self, nu: f64, z: Complex64) -> Result<Complex64> {
        check_input(nu, z)?;
        if is_zero(z) {
            return j_at_origin(nu);
        }

        if nu >= 0.0 {
            return unscale(self.j_nonnegative(nu, z)?, "J", nu, z);
        }

        let order = -nu;
        if order.fract() == 0.0 {
            let j = self.j_nonnegative(order, z)?;
            return unscale(j * parity(order), "J", nu, z);
        }

        let pair = self.jy_nonnegative(order, z)?;
        let j = pair.j * cos_pi(order) - pair.y * sin_pi(order);
        unscale(j, "J", nu, z)
    }

    /// Bessel function of the second kind (Neumann function) Y_ν(z)
    ///
    /// A failed Wronskian check is logged as a warning.
    pub fn bessely(&self, nu: f64, z: Complex64) -> Result<Complex64> {
        let evaluation = self.evaluate(nu, z)?;
        if let Some(warning) = &evaluation.warning {
            log::warn!("{}", warning);
        }
        Ok(evaluation.y)
    }

    /// Hankel function H⁽¹⁾_ν(z) or H⁽²⁾_ν(z)
    ///
    /// Evaluated together with J and Y; errors of either propagate.
    pub fn hankel(&self, nu: f64, z: Complex64, kind: HankelKind) -> Result<Complex64> {
        let evaluation = self.evaluate(nu, z)?;
        if let Some(warning) = &evaluation.warning {
            log::warn!("{}", warning);
        }
        Ok(evaluation.hankel(kind))
    }

    /// Evaluate J_ν(z), Y_ν(z) and the Hankel functions together
    ///
    /// # Returns
    ///
    /// All four values and the result of the Wronskian check
    pub fn evaluate(&self, nu: f64, z: Complex64) -> Result<Evaluation> {
        check_input(nu, z)?;
        if is_zero(z) {
            return Err(NumericError::Domain(format!(
                "Y_nu is singular at z = 0 (nu={})",
                nu
            )));
        }

        let order = nu.abs();
        let pair = self.jy_nonnegative(order, z)?;
        let (j, y, hankel) = if nu >= 0.0 {
            (pair.j, pair.y, pair.hankel)
        } else if order.fract() == 0.0 {
            let sign = parity(order);
            let hankel = HankelPair {
                first: pair.hankel.first * sign,
                second: pair.hankel.second * sign,
            };
            (pair.j * sign, pair.y * sign, hankel)
        } else {
            let (c, s) = (cos_pi(order), sin_pi(order));
            // H⁽¹⁾_{-ν} = e^{iπν} H⁽¹⁾_ν, H⁽²⁾_{-ν} = e^{-iπν} H⁽²⁾_ν
            let hankel = HankelPair {
                first: pair.hankel.first * exp_i_pi(order),
                second: pair.hankel.second * exp_i_pi(-order),
            };
            (pair.j * c - pair.y * s, pair.j * s + pair.y * c, hankel)
        };

        let warning = if pair.residual < self.config.tolerance {
            None
        } else {
            Some(PrecisionWarning {
                nu,
                z,
                residual: pair.residual,
                tolerance: self.config.tolerance,
            })
        };

        Ok(Evaluation {
            j: unscale(j, "J", nu, z)?,
            y: unscale(y, "Y", nu, z)?,
            h1: unscale(hankel.first, "H(1)", nu, z)?,
            h2: unscale(hankel.second, "H(2)", nu, z)?,
            warning,
        })
    }

    /// Evaluate many (ν, z) pairs in parallel
    ///
    /// The i-th result belongs to the i-th input.
    pub fn evaluate_batch(&self, inputs: &[(f64, Complex64)]) -> Vec<Result<Evaluation>> {
        inputs
            .par_iter()
            .map(|&(nu, z)| self.evaluate(nu, z))
            .collect()
    }

    /// Whether a point with Re z < 0 is continued from the upper half-plane
    fn upper_side(&self, z: Complex64) -> bool {
        z.im > 0.0 || (z.im == 0.0 && self.config.cut_side == CutSide::Upper)
    }

    /// J_ν(z) for ν ≥ 0, z ≠ 0
    fn j_nonnegative(&self, nu: f64, z: Complex64) -> Result<ScaledComplex> {
        if z.re >= 0.0 {
            return Ok(self.core(nu, z, false)?.j);
        }

        let j_w = self.core(nu, -z, false)?.j;
        let side = if self.upper_side(z) { 1.0 } else { -1.0 };
        Ok(j_w * exp_i_pi(side * nu))
    }

    /// J_ν(z), Y_ν(z), the Hankel functions and the Wronskian residual
    /// for ν ≥ 0, z ≠ 0
    fn jy_nonnegative(&self, nu: f64, z: Complex64) -> Result<Pair> {
        let w = if z.re >= 0.0 { z } else { -z };
        let core = self.core(nu, w, true)?;
        let missing =
            || NumericError::NumericOverflow(format!("Y was not evaluated: nu={}, z={}", nu, z));
        let (y_w, y_w_next) = core.y.ok_or_else(missing)?;
        let hankel_w = core.hankel.ok_or_else(missing)?;
        let residual = wronskian_residual(w, core.j, core.j_next, y_w, y_w_next)?;

        if z.re >= 0.0 {
            return Ok(Pair {
                j: core.j,
                y: y_w,
                hankel: hankel_w,
                residual,
            });
        }

        // Analytic continuation from w = -z across the imaginary axis
        let upper = self.upper_side(z);
        let side = if upper { 1.0 } else { -1.0 };
        let j = core.j * exp_i_pi(side * nu);
        let y = y_w * exp_i_pi(-side * nu)
            + core.j * Complex64::new(0.0, 2.0 * side * cos_pi(nu));

        // H⁽¹⁾(z) = -e^{-iπν} H⁽²⁾(w) above the cut, H⁽²⁾(z) = -e^{iπν} H⁽¹⁾(w) below
        let hankel = if upper {
            let first = hankel_w.second * -exp_i_pi(-nu);
            HankelPair {
                first,
                second: j * 2.0 - first,
            }
        } else {
            let second = hankel_w.first * -exp_i_pi(nu);
            HankelPair {
                first: j * 2.0 - second,
                second,
            }
        };

        Ok(Pair {
            j,
            y,
            hankel,
            residual,
        })
    }

    /// J (and optionally Y) at ν and ν + 1 for ν ≥ 0, Re z ≥ 0, z ≠ 0
    fn core(&self, nu: f64, z: Complex64, with_y: bool) -> Result<CoreValues> {
        let config = &self.config;
        let max_iterations = config.max_iterations;
        let method = select_method(nu, z.norm(), config);
        log::debug!("nu={}, z={}: {} method", nu, z, method);

        let values = match method {
            Method::Asymptotic => {
                let at_nu = hankel_expansion(nu, z, config.tolerance, max_iterations)?;
                let at_next = hankel_expansion(nu + 1.0, z, config.tolerance, max_iterations)?;
                CoreValues {
                    j: at_nu.bessel_j(),
                    j_next: at_next.bessel_j(),
                    y: with_y.then(|| (at_nu.bessel_y(), at_next.bessel_y())),
                    hankel: with_y.then_some(at_nu),
                }
            }
            Method::Series | Method::Recurrence => {
                let (mu, n) = split_order(nu);
                let upper = z.im >= 0.0;

                let (j, j_next, seeds) = if method == Method::Series {
                    let j = power_series_j(nu, z, max_iterations)?;
                    let j_next = power_series_j(nu + 1.0, z, max_iterations)?;
                    let seeds = if with_y {
                        Some(self.seeds(mu, z, upper)?)
                    } else {
                        None
                    };
                    (j, j_next, seeds)
                } else {
                    let seeds = self.seeds(mu, z, upper)?;
                    let (j, j_next) =
                        miller_j(mu, n, z, seeds.j_mu, seeds.j_mu1, max_iterations)?;
                    (j, j_next, with_y.then_some(seeds))
                };

                let (y, hankel) = match seeds {
                    Some(seeds) => {
                        let (h, h_next) =
                            forward_hankel(mu, n, z, seeds.h_mu, seeds.h_mu1, max_iterations)?;
                        // Y = ∓i (H - J) for H = H⁽¹⁾ / H⁽²⁾
                        let neumann = |h: ScaledComplex, j: ScaledComplex| {
                            let difference = h - j;
                            if upper {
                                difference.mul_neg_i()
                            } else {
                                difference.mul_i()
                            }
                        };
                        // The other Hankel function is 2J - H
                        let hankel = if upper {
                            HankelPair {
                                first: h,
                                second: j * 2.0 - h,
                            }
                        } else {
                            HankelPair {
                                first: j * 2.0 - h,
                                second: h,
                            }
                        };
                        (
                            Some((neumann(h, j), neumann(h_next, j_next))),
                            Some(hankel),
                        )
                    }
                    None => (None, None),
                };

                CoreValues {
                    j,
                    j_next,
                    y,
                    hankel,
                }
            }
        };

        if z.im == 0.0 {
            Ok(values.real())
        } else {
            Ok(values)
        }
    }

    /// J and the dominant Hankel function at μ and μ + 1, |μ| ≤ ½
    fn seeds(&self, mu: f64, z: Complex64, upper: bool) -> Result<Seeds> {
        let config = &self.config;
        let max_iterations = config.max_iterations;
        let abs_z = z.norm();

        if abs_z > config.series_radius {
            let at_mu = hankel_expansion(mu, z, config.tolerance, max_iterations)?;
            let at_mu1 = hankel_expansion(mu + 1.0, z, config.tolerance, max_iterations)?;
            return Ok(Seeds {
                j_mu: at_mu.bessel_j(),
                j_mu1: at_mu1.bessel_j(),
                h_mu: at_mu.dominant(upper),
                h_mu1: at_mu1.dominant(upper),
            });
        }

        let j_mu = power_series_j(mu, z, max_iterations)?;
        let j_mu1 = power_series_j(mu + 1.0, z, max_iterations)?;

        if abs_z <= config.temme_radius {
            let (y_mu, y_mu1) = temme_neumann_pair(mu, z, max_iterations)?;
            let (h_mu, h_mu1) = if upper {
                (j_mu + y_mu.mul_i(), j_mu1 + y_mu1.mul_i())
            } else {
                (j_mu + y_mu.mul_neg_i(), j_mu1 + y_mu1.mul_neg_i())
            };
            return Ok(Seeds {
                j_mu,
                j_mu1,
                h_mu,
                h_mu1,
            });
        }

        // H⁽²⁾(z) = conj(H⁽¹⁾(conj z)) for real order
        let rho = if upper {
            steed_hankel_ratio(mu, z, max_iterations)?
        } else {
            steed_hankel_ratio(mu, z.conj(), max_iterations)?.conj()
        };
        let jm = unscale(j_mu, "J", mu, z)?;
        let jm1 = unscale(j_mu1, "J", mu + 1.0, z)?;
        let mu_over_z = checked_div(Complex64::new(mu, 0.0), z)?;
        let derivative = mu_over_z * jm - jm1;
        let wronskian = checked_div(
            Complex64::new(0.0, if upper { 2.0 / PI } else { -2.0 / PI }),
            z,
        )?;
        let h0 = checked_div(wronskian, rho * jm - derivative)?;
        let h1 = (mu_over_z - rho) * h0;

        Ok(Seeds {
            j_mu,
            j_mu1,
            h_mu: ScaledComplex::from(h0),
            h_mu1: ScaledComplex::from(h1),
        })
    }
}

fn check_input(nu: f64, z: Complex64) -> Result<()> {
    if !nu.is_finite() || !z.re.is_finite() || !z.im.is_finite() {
        return Err(NumericError::Domain(format!(
            "order and argument must be finite: nu={}, z={}",
            nu, z
        )));
    }
    Ok(())
}

#[inline]
fn is_zero(z: Complex64) -> bool {
    z.re == 0.0 && z.im == 0.0
}

/// (-1)^n for an integer-valued order
#[inline]
fn parity(order: f64) -> f64 {
    if order % 2.0 == 0.0 {
        1.0
    } else {
        -1.0
    }
}

fn j_at_origin(nu: f64) -> Result<Complex64> {
    if nu == 0.0 {
        Ok(Complex64::new(1.0, 0.0))
    } else if nu > 0.0 || nu.fract() == 0.0 {
        Ok(Complex64::new(0.0, 0.0))
    } else {
        Err(NumericError::Domain(format!(
            "J_nu is singular at z = 0 for negative non-integer order nu={}",
            nu
        )))
    }
}

fn unscale(value: ScaledComplex, name: &str, nu: f64, z: Complex64) -> Result<Complex64> {
    value.to_complex().ok_or_else(|| {
        NumericError::NumericOverflow(format!(
            "{} exceeds the f64 range: nu={}, z={}",
            name, nu, z
        ))
    })
}

/// |J_ν Y_{ν+1} - J_{ν+1} Y_ν + 2/(πz)| relative to the largest of its terms
fn wronskian_residual(
    z: Complex64,
    j: ScaledComplex,
    j_next: ScaledComplex,
    y: ScaledComplex,
    y_next: ScaledComplex,
) -> Result<f64> {
    let first = j * y_next;
    let second = j_next * y;
    let expected = ScaledComplex::from(FRAC_2_PI).checked_div(&ScaledComplex::from(z))?;
    let deviation = first - second + expected;
    if deviation.is_zero() {
        return Ok(0.0);
    }
    let scale = expected
        .log2_abs()
        .max(first.log2_abs())
        .max(second.log2_abs());
    Ok((deviation.log2_abs() - scale).exp2())
}
