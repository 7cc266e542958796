/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Complex arithmetic kernel
//!
//! Addition, subtraction and multiplication come straight from
//! [`num_complex::Complex64`]. This module adds the operations the Bessel
//! engine needs beyond that: division that reports a zero divisor, principal
//! branches of the logarithm, square root and power, trigonometric functions
//! of πx that are exact at integers and half-integers, and the
//! [`ScaledComplex`] type for values outside the f64 range.

mod arithmetic;
mod scaled;

pub use arithmetic::{
    checked_div, cos_pi, exp_i_pi, mul_i, mul_neg_i, principal_arg, principal_ln, principal_pow,
    principal_sqrt, sin_pi,
};
pub use scaled::{ldexp, ldexp_complex, ScaledComplex};
