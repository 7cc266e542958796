/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Configuration for the Bessel evaluation engine

use crate::utils::constants::{
    DEFAULT_ASYMPTOTIC_MIN_ARGUMENT, DEFAULT_ASYMPTOTIC_ORDER_FACTOR, DEFAULT_MAX_ITERATIONS,
    DEFAULT_SERIES_RADIUS, DEFAULT_TEMME_RADIUS, DEFAULT_TOLERANCE,
};
use crate::utils::errors::{NumericError, Result};
use serde::{Deserialize, Serialize};

/// Side of the branch cut that points exactly on the negative real axis belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutSide {
    /// arg z = π, the limit from Im z > 0
    #[default]
    Upper,
    /// arg z = -π, the limit from Im z < 0
    Lower,
}

/// Bessel engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tolerance of the Wronskian consistency check
    pub tolerance: f64,
    /// Upper bound for the iterations of every series, continued fraction
    /// and recurrence
    pub max_iterations: usize,
    /// Largest |z| evaluated through the ascending power series
    pub series_radius: f64,
    /// Largest |z| for which Temme's series seeds the Neumann function
    pub temme_radius: f64,
    /// Smallest |z| for which the Hankel expansion is summed directly
    pub asymptotic_min_argument: f64,
    /// The Hankel expansion at order ν is used when |z| ≥ factor · ν²
    pub asymptotic_order_factor: f64,
    /// Side of the negative real axis for arguments with zero imaginary part
    pub cut_side: CutSide,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            series_radius: DEFAULT_SERIES_RADIUS,
            temme_radius: DEFAULT_TEMME_RADIUS,
            asymptotic_min_argument: DEFAULT_ASYMPTOTIC_MIN_ARGUMENT,
            asymptotic_order_factor: DEFAULT_ASYMPTOTIC_ORDER_FACTOR,
            cut_side: CutSide::Upper,
        }
    }
}

impl EngineConfig {
    /// Check that the thresholds describe a usable dispatch policy
    ///
    /// # Returns
    ///
    /// The configuration itself, or a domain error naming the first bad field
    pub fn validate(self) -> Result<Self> {
        if !(self.tolerance > 0.0) || !self.tolerance.is_finite() {
            return Err(NumericError::Domain(format!(
                "tolerance must be positive: {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(NumericError::Domain(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.temme_radius > 0.0) || !(self.series_radius >= self.temme_radius) {
            return Err(NumericError::Domain(format!(
                "need 0 < temme_radius <= series_radius, got {} and {}",
                self.temme_radius, self.series_radius
            )));
        }
        // Arguments inside the series disc never reach the asymptotic regime
        if !(self.asymptotic_min_argument >= self.series_radius) {
            return Err(NumericError::Domain(format!(
                "asymptotic_min_argument must be at least series_radius: {}",
                self.asymptotic_min_argument
            )));
        }
        if !(self.asymptotic_order_factor > 0.0) || !self.asymptotic_order_factor.is_finite() {
            return Err(NumericError::Domain(format!(
                "asymptotic_order_factor must be positive: {}",
                self.asymptotic_order_factor
            )));
        }
        Ok(self)
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        Ok(config.validate()?)
    }
}
