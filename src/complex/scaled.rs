/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Complex values with an explicit binary exponent
//!
//! A [`ScaledComplex`] represents `mantissa · 2^exponent`. The mantissa is
//! kept normalised so that its larger component lies in [0.5, 1), which lets
//! intermediates of the Bessel evaluation range far beyond f64 without
//! overflowing or underflowing. Values are converted back to [`Complex64`]
//! exactly once, when a public result is produced.

use super::arithmetic::checked_div;
use crate::utils::errors::Result;
use num_complex::Complex64;
use std::f64::consts::LN_2;
use std::ops::{Add, Mul, Neg, Sub};

/// Largest shift applied to an f64 in a single multiplication
const MAX_SHIFT_STEP: i64 = 1000;

/// Exact 2^k for |k| ≤ 1000
#[inline]
fn power_of_two(k: i64) -> f64 {
    f64::from_bits(((1023 + k) as u64) << 52)
}

/// Multiply `x` by 2^k in steps that never overflow or underflow prematurely
pub fn ldexp(x: f64, k: i64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let k = k.clamp(-2200, 2200);
    let mut x = x;
    let mut remaining = k;
    while remaining > MAX_SHIFT_STEP {
        x *= power_of_two(MAX_SHIFT_STEP);
        remaining -= MAX_SHIFT_STEP;
    }
    while remaining < -MAX_SHIFT_STEP {
        x *= power_of_two(-MAX_SHIFT_STEP);
        remaining += MAX_SHIFT_STEP;
    }
    x * power_of_two(remaining)
}

/// Multiply both components of `z` by 2^k
#[inline]
pub fn ldexp_complex(z: Complex64, k: i64) -> Complex64 {
    if k == 0 {
        return z;
    }
    Complex64::new(ldexp(z.re, k), ldexp(z.im, k))
}

/// Binary exponent e with |x| · 2^-e in [0.5, 1) for finite non-zero x
fn binary_exponent(x: f64) -> i64 {
    let bits = x.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    if biased == 0 {
        // Subnormal: lift into the normal range first
        binary_exponent(x * power_of_two(64)) - 64
    } else {
        biased - 1022
    }
}

/// A complex value `mantissa · 2^exponent` with an unbounded binary exponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledComplex {
    mantissa: Complex64,
    exponent: i64,
}

impl ScaledComplex {
    /// Build a normalised value from a mantissa and a binary exponent
    pub fn new(mantissa: Complex64, exponent: i64) -> Self {
        let mut value = Self { mantissa, exponent };
        value.normalize();
        value
    }

    /// The value zero
    pub fn zero() -> Self {
        Self {
            mantissa: Complex64::new(0.0, 0.0),
            exponent: 0,
        }
    }

    /// Normalised mantissa
    pub fn mantissa(&self) -> Complex64 {
        self.mantissa
    }

    /// Binary exponent
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// e^w, with the real part of `w` carried in the exponent
    ///
    /// # Arguments
    ///
    /// * `w` - The exponent of e
    ///
    /// # Returns
    ///
    /// e^w as a scaled value; it is representable for any finite `w`
    pub fn exp(w: Complex64) -> Self {
        let k = (w.re / LN_2).floor();
        let r = w.re - k * LN_2;
        let magnitude = r.exp();
        Self::new(
            Complex64::new(magnitude * w.im.cos(), magnitude * w.im.sin()),
            k as i64,
        )
    }

    fn normalize(&mut self) {
        if self.is_zero() {
            self.exponent = 0;
            self.mantissa = Complex64::new(0.0, 0.0);
            return;
        }
        if !self.mantissa.re.is_finite() || !self.mantissa.im.is_finite() {
            return;
        }
        let largest = self.mantissa.re.abs().max(self.mantissa.im.abs());
        let e = binary_exponent(largest);
        self.mantissa = ldexp_complex(self.mantissa, -e);
        self.exponent += e;
    }

    /// Whether the value is exactly zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.re == 0.0 && self.mantissa.im == 0.0
    }

    /// Whether the mantissa is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.mantissa.re.is_finite() && self.mantissa.im.is_finite()
    }

    /// log2 |value|, or -∞ for zero
    pub fn log2_abs(&self) -> f64 {
        if self.is_zero() {
            return f64::NEG_INFINITY;
        }
        self.mantissa.norm().log2() + self.exponent as f64
    }

    /// The real part alone, with a zero imaginary part
    pub fn real(&self) -> Self {
        Self::new(Complex64::new(self.mantissa.re, 0.0), self.exponent)
    }

    /// Multiply by i
    pub fn mul_i(&self) -> Self {
        Self {
            mantissa: super::arithmetic::mul_i(self.mantissa),
            exponent: self.exponent,
        }
    }

    /// Multiply by -i
    pub fn mul_neg_i(&self) -> Self {
        Self {
            mantissa: super::arithmetic::mul_neg_i(self.mantissa),
            exponent: self.exponent,
        }
    }

    /// Quotient `self / other`, a domain error if `other` is zero
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        let mantissa = checked_div(self.mantissa, other.mantissa)?;
        Ok(Self::new(mantissa, self.exponent - other.exponent))
    }

    /// The mantissa expressed relative to 2^exponent, i.e. value / 2^exponent
    pub fn mantissa_at(&self, exponent: i64) -> Complex64 {
        ldexp_complex(self.mantissa, self.exponent - exponent)
    }

    /// Convert to an f64 complex value
    ///
    /// # Returns
    ///
    /// `None` if the value lies above the f64 range or is not finite;
    /// values below the f64 range underflow to zero
    pub fn to_complex(&self) -> Option<Complex64> {
        if !self.is_finite() {
            return None;
        }
        if self.is_zero() {
            return Some(Complex64::new(0.0, 0.0));
        }
        if self.exponent > 1100 {
            return None;
        }
        if self.exponent < -1200 {
            return Some(Complex64::new(0.0, 0.0));
        }
        let value = ldexp_complex(self.mantissa, self.exponent);
        if value.re.is_finite() && value.im.is_finite() {
            Some(value)
        } else {
            None
        }
    }
}

impl Default for ScaledComplex {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Complex64> for ScaledComplex {
    fn from(value: Complex64) -> Self {
        Self::new(value, 0)
    }
}

impl From<f64> for ScaledComplex {
    fn from(value: f64) -> Self {
        Self::new(Complex64::new(value, 0.0), 0)
    }
}

impl Mul for ScaledComplex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.mantissa * rhs.mantissa, self.exponent + rhs.exponent)
    }
}

impl Mul<Complex64> for ScaledComplex {
    type Output = Self;

    fn mul(self, rhs: Complex64) -> Self {
        Self::new(self.mantissa * rhs, self.exponent)
    }
}

impl Mul<f64> for ScaledComplex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.mantissa * rhs, self.exponent)
    }
}

impl Add for ScaledComplex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.is_zero() {
            return rhs;
        }
        if rhs.is_zero() {
            return self;
        }
        let exponent = self.exponent.max(rhs.exponent);
        Self::new(
            self.mantissa_at(exponent) + rhs.mantissa_at(exponent),
            exponent,
        )
    }
}

impl Neg for ScaledComplex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            mantissa: -self.mantissa,
            exponent: self.exponent,
        }
    }
}

impl Sub for ScaledComplex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}
