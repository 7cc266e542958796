/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! # artmie-rs
//!
//! Bessel functions of the first and second kind and Hankel functions for
//! real order and complex argument, and the Mie solution for scattering of
//! light by homogeneous spheres built on them.
//!
//! The special-function engine combines power series, Temme's series,
//! continued fractions, Miller's backward recurrence, forward recurrence of
//! the Hankel function and Hankel's asymptotic expansion, selected per
//! (order, argument) by an explicit dispatch policy.

pub mod bessel;
pub mod cli;
pub mod complex;
pub mod fixtures;
pub mod mie;
pub mod utils;

pub use bessel::{besselj, bessely, hankel, BesselEngine, EngineConfig, HankelKind};
pub use mie::MieCalculator;
pub use utils::errors::NumericError;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
