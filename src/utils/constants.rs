/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Numeric constants and default engine parameters
//!
//! The defaults below are the values [`EngineConfig::default`] is built from.
//! They are the documented contract of the evaluation engine: results stay
//! within [`DEFAULT_TOLERANCE`] (relative, or absolute for values below
//! [`ABSOLUTE_ERROR_THRESHOLD`]) for arguments handled by these thresholds.
//!
//! [`EngineConfig::default`]: crate::bessel::EngineConfig

/// Machine epsilon used as the convergence criterion of every series
pub const EPSILON: f64 = f64::EPSILON;

/// Smallest magnitude the continued-fraction evaluations let a denominator take
pub const TINY: f64 = 1.0e-300;

/// Tolerance of the precision guarantee and of the Wronskian consistency check
pub const DEFAULT_TOLERANCE: f64 = 1.0e-8;

/// Below this magnitude results are judged by absolute instead of relative error
pub const ABSOLUTE_ERROR_THRESHOLD: f64 = 1.0e-4;

/// Upper bound for the iterations of any single loop of the engine
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Largest |z| evaluated through the ascending power series
pub const DEFAULT_SERIES_RADIUS: f64 = 12.0;

/// Largest |z| for which Temme's series seeds the Neumann function
pub const DEFAULT_TEMME_RADIUS: f64 = 2.0;

/// Smallest |z| for which the Hankel expansion is summed directly
pub const DEFAULT_ASYMPTOTIC_MIN_ARGUMENT: f64 = 12.0;

/// The Hankel expansion at order ν needs |z| ≥ factor · ν²
pub const DEFAULT_ASYMPTOTIC_ORDER_FACTOR: f64 = 1.0;

/// Running values of a recurrence are rescaled once they exceed 2^this
pub const RESCALE_EXPONENT: i32 = 256;

/// 2/π
pub const FRAC_2_PI: f64 = std::f64::consts::FRAC_2_PI;
