/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Mie scattering by homogeneous spheres
//!
//! Coefficients and efficiencies follow Bohren & Huffman, *Absorption and
//! Scattering of Light by Small Particles* (1983). All cylinder functions
//! come from the [`BesselEngine`](crate::bessel::BesselEngine).

pub mod coefficients;
pub mod efficiencies;
pub mod errors;

pub use coefficients::{mie_coefficients, wiscombe_order, MieCoefficients};
pub use efficiencies::{CrossSections, MieEfficiencies};
pub use errors::{MieError, Result};

use crate::bessel::BesselEngine;
use num_complex::Complex64;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Mie calculator for homogeneous spheres
#[derive(Debug, Clone, Default)]
pub struct MieCalculator {
    engine: BesselEngine,
    n_max: Option<usize>,
}

impl MieCalculator {
    /// Create a calculator that evaluates through `engine`
    pub fn new(engine: BesselEngine) -> Self {
        Self {
            engine,
            n_max: None,
        }
    }

    /// Use a fixed truncation order instead of Wiscombe's criterion
    pub fn with_n_max(mut self, n_max: usize) -> Self {
        self.n_max = Some(n_max);
        self
    }

    /// The Bessel engine of this calculator
    pub fn engine(&self) -> &BesselEngine {
        &self.engine
    }

    /// Truncation order used for size parameter `x`
    pub fn truncation_order(&self, x: f64) -> usize {
        self.n_max.unwrap_or_else(|| wiscombe_order(x))
    }

    /// Coefficients a_n, b_n for size parameter `x` and relative index `m`
    pub fn coefficients(&self, x: f64, m: Complex64) -> Result<MieCoefficients> {
        coefficients::validate(x, m)?;
        mie_coefficients(&self.engine, x, m, self.truncation_order(x))
    }

    /// Efficiency factors for size parameter `x` and relative index `m`
    ///
    /// # Arguments
    ///
    /// * `x` - Size parameter 2π n_medium r / λ
    /// * `m` - Refractive index of the sphere relative to the medium
    ///
    /// # Returns
    ///
    /// Q_ext, Q_sca, Q_abs, Q_back, Q_pr and the asymmetry parameter
    pub fn efficiencies(&self, x: f64, m: Complex64) -> Result<MieEfficiencies> {
        let coefficients = self.coefficients(x, m)?;
        Ok(MieEfficiencies::from_coefficients(x, &coefficients))
    }

    /// Cross sections of a sphere in a non-absorbing medium
    ///
    /// # Arguments
    ///
    /// * `radius` - Sphere radius
    /// * `wavelength` - Vacuum wavelength, same unit as `radius`
    /// * `n_particle` - Complex refractive index of the sphere
    /// * `n_medium` - Real refractive index of the medium
    ///
    /// # Returns
    ///
    /// Cross sections in the squared unit of `radius`
    pub fn cross_sections(
        &self,
        radius: f64,
        wavelength: f64,
        n_particle: Complex64,
        n_medium: f64,
    ) -> Result<CrossSections> {
        if !(radius > 0.0) || !(wavelength > 0.0) || !(n_medium > 0.0) {
            return Err(MieError::InvalidParameter(format!(
                "radius, wavelength and medium index must be positive: r={}, lambda={}, n_medium={}",
                radius, wavelength, n_medium
            )));
        }
        let x = 2.0 * PI * n_medium * radius / wavelength;
        let m = n_particle / n_medium;
        Ok(self.efficiencies(x, m)?.cross_sections(radius))
    }

    /// Efficiencies for many (x, m) pairs in parallel, in input order
    pub fn efficiencies_batch(&self, inputs: &[(f64, Complex64)]) -> Vec<Result<MieEfficiencies>> {
        inputs
            .par_iter()
            .map(|&(x, m)| self.efficiencies(x, m))
            .collect()
    }
}
