/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Bessel, Neumann and Hankel functions of real order and complex argument
//!
//! The free functions [`besselj`], [`bessely`] and [`hankel`] use a
//! process-wide engine with the default configuration. Build a
//! [`BesselEngine`] for other thresholds, tolerances or branch-cut sides.
//!
//! # Examples
//!
//! ```
//! use artmie_rs::bessel::{besselj, hankel, HankelKind};
//! use num_complex::Complex64;
//!
//! let z = Complex64::new(1.0, 0.0);
//! let j = besselj(0.0, z).unwrap();
//! let h = hankel(0.0, z, HankelKind::First).unwrap();
//! assert!((j.re - 0.7651976866).abs() < 1e-9);
//! assert!((h.im - 0.0882569642).abs() < 1e-9);
//! ```

pub mod asymptotic;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod errors;
pub mod hankel;
pub mod recurrence;
pub mod series;

pub use config::{CutSide, EngineConfig};
pub use dispatch::{select_method, split_order, Method};
pub use engine::{BesselEngine, Evaluation};
pub use errors::PrecisionWarning;
pub use hankel::HankelKind;

use crate::utils::errors::Result;
use num_complex::Complex64;
use once_cell::sync::Lazy;

/// Engine with the default configuration shared by the free functions
static DEFAULT_ENGINE: Lazy<BesselEngine> = Lazy::new(BesselEngine::default);

/// J_ν(z) with the default configuration
pub fn besselj(nu: f64, z: Complex64) -> Result<Complex64> {
    DEFAULT_ENGINE.besselj(nu, z)
}

/// Y_ν(z) with the default configuration
pub fn bessely(nu: f64, z: Complex64) -> Result<Complex64> {
    DEFAULT_ENGINE.bessely(nu, z)
}

/// H⁽¹⁾_ν(z) or H⁽²⁾_ν(z) with the default configuration
pub fn hankel(nu: f64, z: Complex64, kind: HankelKind) -> Result<Complex64> {
    DEFAULT_ENGINE.hankel(nu, z, kind)
}
