/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Gamma-function helpers used by the Bessel series
//!
//! This module provides the logarithm of the gamma function for the power
//! series prefactor and the reciprocal-gamma combinations that enter
//! Temme's series for the Neumann function.

use super::errors::{NumericError, Result};
use std::f64::consts::PI;

/// Lanczos parameter g
const LANCZOS_G: f64 = 7.0;

/// Lanczos coefficients for g = 7, n = 9
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Taylor coefficients of 1/Γ(1 + x) about x = 0
const RECIPROCAL_GAMMA_COEFFICIENTS: [f64; 27] = [
    1.0,
    0.577_215_664_901_532_9,
    -0.655_878_071_520_253_9,
    -0.042_002_635_034_095_24,
    0.166_538_611_382_291_5,
    -0.042_197_734_555_544_34,
    -0.009_621_971_527_876_974,
    0.007_218_943_246_663_1,
    -0.001_165_167_591_859_065,
    -0.000_215_241_674_114_951,
    0.000_128_050_282_388_116_2,
    -0.000_020_134_854_780_788_24,
    -1.250_493_482_142_670_7e-6,
    1.133_027_231_981_695_9e-6,
    -2.056_338_416_977_607e-7,
    6.116_095_104_481_416e-9,
    5.002_007_644_469_223e-9,
    -1.181_274_570_487_020_1e-9,
    1.043_426_711_691_100_5e-10,
    7.782_263_439_905_071e-12,
    -3.696_805_618_642_206e-12,
    5.100_370_287_454_476e-13,
    -2.058_326_053_566_506_8e-14,
    -5.348_122_539_423_018e-15,
    1.226_778_628_238_260_8e-15,
    -1.181_259_301_697_458_8e-16,
    1.186_692_254_751_600_3e-18,
];

/// Natural logarithm of the gamma function for positive arguments
///
/// # Arguments
///
/// * `x` - The argument (x > 0)
///
/// # Returns
///
/// ln Γ(x) or an error if x is not a positive finite number
pub fn ln_gamma(x: f64) -> Result<f64> {
    if !(x > 0.0) || !x.is_finite() {
        return Err(NumericError::Domain(format!(
            "ln_gamma requires a positive finite argument: x={}",
            x
        )));
    }

    if x < 0.5 {
        // Reflection: Γ(x)Γ(1-x) = π / sin(πx)
        return Ok((PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x)?);
    }

    let x = x - 1.0;
    let t = x + LANCZOS_G + 0.5;
    let mut a = LANCZOS_COEFFICIENTS[0];
    for (i, &c) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        a += c / (x + i as f64);
    }

    Ok(0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + a.ln())
}

/// Reciprocal-gamma combinations needed by Temme's series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemmeGammas {
    /// (1/Γ(1-μ) - 1/Γ(1+μ)) / (2μ), finite as μ → 0
    pub gam1: f64,
    /// (1/Γ(1-μ) + 1/Γ(1+μ)) / 2
    pub gam2: f64,
    /// 1/Γ(1+μ)
    pub gampl: f64,
    /// 1/Γ(1-μ)
    pub gammi: f64,
}

/// Evaluate the reciprocal-gamma combinations for |μ| ≤ 1/2
///
/// Both combinations are summed from the Taylor series of 1/Γ(1 + x), which
/// keeps `gam1` accurate where the defining difference cancels.
pub fn temme_gammas(mu: f64) -> TemmeGammas {
    let mu2 = mu * mu;
    let mut even = 0.0;
    let mut odd = 0.0;
    let mut power = 1.0;

    for pair in RECIPROCAL_GAMMA_COEFFICIENTS.chunks(2) {
        even += pair[0] * power;
        if let Some(&c) = pair.get(1) {
            odd += c * power;
        }
        power *= mu2;
    }

    let gam1 = -odd;
    let gam2 = even;

    TemmeGammas {
        gam1,
        gam2,
        gampl: gam2 - mu * gam1,
        gammi: gam2 + mu * gam1,
    }
}
