/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Choice of evaluation method for a given order and argument magnitude

use super::config::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Evaluation method for J and Y at order ν ≥ 0 and Re z ≥ 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Ascending power series for J, Temme's series or Steed's continued
    /// fraction for the seeds of Y, forward recurrence of the Hankel function
    Series,
    /// CF1 and Miller's backward recurrence for J, Hankel-expansion seeds
    /// and forward recurrence of the Hankel function for Y
    Recurrence,
    /// Hankel's asymptotic expansion at ν and ν + 1
    Asymptotic,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Series => write!(f, "series"),
            Method::Recurrence => write!(f, "recurrence"),
            Method::Asymptotic => write!(f, "asymptotic"),
        }
    }
}

/// Select the evaluation method
///
/// # Arguments
///
/// * `nu` - The order (ν ≥ 0)
/// * `abs_z` - The argument magnitude |z|
/// * `config` - The engine configuration holding the thresholds
///
/// # Returns
///
/// The method the engine uses for this (ν, |z|)
pub fn select_method(nu: f64, abs_z: f64, config: &EngineConfig) -> Method {
    if abs_z <= config.series_radius {
        Method::Series
    } else if abs_z >= config
        .asymptotic_min_argument
        .max(config.asymptotic_order_factor * nu * nu)
    {
        Method::Asymptotic
    } else {
        Method::Recurrence
    }
}

/// Split ν ≥ 0 into μ + n with n = ⌊ν + ½⌋ and μ ∈ [-½, ½)
pub fn split_order(nu: f64) -> (f64, usize) {
    let n = (nu + 0.5).floor();
    (nu - n, n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_method() {
        let config = EngineConfig::default();
        assert_eq!(select_method(0.0, 1.0, &config), Method::Series);
        assert_eq!(select_method(50.0, 12.0, &config), Method::Series);
        assert_eq!(select_method(0.0, 12.5, &config), Method::Asymptotic);
        assert_eq!(select_method(3.0, 12.5, &config), Method::Asymptotic);
        assert_eq!(select_method(5.0, 20.0, &config), Method::Recurrence);
        assert_eq!(select_method(5.0, 25.0, &config), Method::Asymptotic);
        assert_eq!(select_method(100.0, 5000.0, &config), Method::Recurrence);
    }

    #[test]
    fn test_select_method_custom_thresholds() {
        let config = EngineConfig {
            series_radius: 5.0,
            asymptotic_min_argument: 30.0,
            ..EngineConfig::default()
        };
        assert_eq!(select_method(0.0, 6.0, &config), Method::Recurrence);
        assert_eq!(select_method(0.0, 30.0, &config), Method::Asymptotic);
    }

    #[test]
    fn test_split_order() {
        assert_eq!(split_order(0.0), (0.0, 0));
        assert_eq!(split_order(0.5), (-0.5, 1));
        assert_eq!(split_order(2.25), (0.25, 2));
        assert_eq!(split_order(3.5), (-0.5, 4));
        let (mu, n) = split_order(7.7);
        assert_eq!(n, 8);
        assert!((mu + 0.3).abs() < 1e-12);
    }
}
