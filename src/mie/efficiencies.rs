/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Efficiency factors and cross sections from the Mie coefficients

use super::coefficients::MieCoefficients;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Dimensionless efficiency factors of a sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MieEfficiencies {
    /// Extinction efficiency
    pub q_ext: f64,
    /// Scattering efficiency
    pub q_sca: f64,
    /// Absorption efficiency, Q_ext - Q_sca
    pub q_abs: f64,
    /// Backscattering efficiency
    pub q_back: f64,
    /// Radiation-pressure efficiency, Q_ext - g Q_sca
    pub q_pr: f64,
    /// Asymmetry parameter g = <cos θ>
    pub asymmetry: f64,
}

impl MieEfficiencies {
    /// Sum the efficiency series of the coefficients at size parameter `x`
    pub fn from_coefficients(x: f64, coefficients: &MieCoefficients) -> Self {
        let a = &coefficients.a;
        let b = &coefficients.b;
        let n_max = coefficients.n_max();

        let mut ext = 0.0;
        let mut sca = 0.0;
        let mut back = num_complex::Complex64::new(0.0, 0.0);
        let mut asym = 0.0;

        for i in 0..n_max {
            let n = (i + 1) as f64;
            let weight = 2.0 * n + 1.0;
            ext += weight * (a[i] + b[i]).re;
            sca += weight * (a[i].norm_sqr() + b[i].norm_sqr());

            let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
            back += (a[i] - b[i]) * (weight * sign);

            asym += weight / (n * (n + 1.0)) * (a[i] * b[i].conj()).re;
            if i + 1 < n_max {
                asym += n * (n + 2.0) / (n + 1.0)
                    * (a[i] * a[i + 1].conj() + b[i] * b[i + 1].conj()).re;
            }
        }

        let x2 = x * x;
        let q_ext = 2.0 / x2 * ext;
        let q_sca = 2.0 / x2 * sca;
        let q_back = back.norm_sqr() / x2;
        let asymmetry = if q_sca > 0.0 {
            4.0 / (x2 * q_sca) * asym
        } else {
            0.0
        };

        Self {
            q_ext,
            q_sca,
            q_abs: q_ext - q_sca,
            q_back,
            q_pr: q_ext - asymmetry * q_sca,
            asymmetry,
        }
    }

    /// Cross sections C = Q · πr² of a sphere with radius `radius`
    pub fn cross_sections(&self, radius: f64) -> CrossSections {
        let area = PI * radius * radius;
        CrossSections {
            c_ext: self.q_ext * area,
            c_sca: self.q_sca * area,
            c_abs: self.q_abs * area,
            c_back: self.q_back * area,
            c_pr: self.q_pr * area,
        }
    }
}

/// Cross sections in the squared length unit of the radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSections {
    /// Extinction cross section
    pub c_ext: f64,
    /// Scattering cross section
    pub c_sca: f64,
    /// Absorption cross section
    pub c_abs: f64,
    /// Backscattering cross section
    pub c_back: f64,
    /// Radiation-pressure cross section
    pub c_pr: f64,
}
