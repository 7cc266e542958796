/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Checked complex operations and exact trigonometry at multiples of π

use crate::utils::errors::{NumericError, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Multiply a complex number by i: (a+bi)·i = -b+ai
#[inline]
pub fn mul_i(z: Complex64) -> Complex64 {
    Complex64::new(-z.im, z.re)
}

/// Multiply a complex number by -i: (a+bi)·(-i) = b-ai
#[inline]
pub fn mul_neg_i(z: Complex64) -> Complex64 {
    Complex64::new(z.im, -z.re)
}

/// Overflow-safe complex division `a / b`
///
/// The divisor is scaled by its larger component before any product is
/// formed, so quotients of representable values never overflow in between.
///
/// # Arguments
///
/// * `a` - The dividend
/// * `b` - The divisor
///
/// # Returns
///
/// The quotient, or a domain error if `b` is zero
pub fn checked_div(a: Complex64, b: Complex64) -> Result<Complex64> {
    if b.re == 0.0 && b.im == 0.0 {
        return Err(NumericError::Domain(format!("division by zero: ({}) / 0", a)));
    }

    if b.re.abs() >= b.im.abs() {
        let r = b.im / b.re;
        let den = b.re + b.im * r;
        Ok(Complex64::new(
            (a.re + a.im * r) / den,
            (a.im - a.re * r) / den,
        ))
    } else {
        let r = b.re / b.im;
        let den = b.re * r + b.im;
        Ok(Complex64::new(
            (a.re * r + a.im) / den,
            (a.im * r - a.re) / den,
        ))
    }
}

/// Principal argument in (-π, π]
///
/// Points on the negative real axis get arg = π whatever the sign of
/// their zero imaginary part.
#[inline]
pub fn principal_arg(z: Complex64) -> f64 {
    if z.im == 0.0 && z.re < 0.0 {
        PI
    } else {
        z.im.atan2(z.re)
    }
}

/// Principal logarithm ln|z| + i·arg z, or a domain error at the origin
pub fn principal_ln(z: Complex64) -> Result<Complex64> {
    if z.re == 0.0 && z.im == 0.0 {
        return Err(NumericError::Domain("logarithm of zero".to_string()));
    }
    Ok(Complex64::new(z.re.hypot(z.im).ln(), principal_arg(z)))
}

/// Principal square root, Re ≥ 0, cut along the negative real axis
///
/// The negative real axis maps onto the positive imaginary axis.
pub fn principal_sqrt(z: Complex64) -> Complex64 {
    if z.im == 0.0 && z.re < 0.0 {
        Complex64::new(0.0, (-z.re).sqrt())
    } else {
        z.sqrt()
    }
}

/// Principal power z^p = exp(p · Log z)
///
/// # Arguments
///
/// * `z` - The base
/// * `p` - The real exponent
///
/// # Returns
///
/// The power; `0^p` is 0 for p > 0, 1 for p = 0 and a domain error for p < 0
pub fn principal_pow(z: Complex64, p: f64) -> Result<Complex64> {
    if z.re == 0.0 && z.im == 0.0 {
        return if p > 0.0 {
            Ok(Complex64::new(0.0, 0.0))
        } else if p == 0.0 {
            Ok(Complex64::new(1.0, 0.0))
        } else {
            Err(NumericError::Domain(format!(
                "zero raised to the negative power {}",
                p
            )))
        };
    }
    if p == 0.0 {
        return Ok(Complex64::new(1.0, 0.0));
    }

    Ok((principal_ln(z)? * p).exp())
}

/// sin(π·x), exact at integers and half-integers
pub fn sin_pi(x: f64) -> f64 {
    let (ax, sign) = if x < 0.0 { (-x, -1.0) } else { (x, 1.0) };
    let r = ax % 2.0;

    if r == 0.0 || r == 1.0 {
        return 0.0;
    }
    if r == 0.5 {
        return sign;
    }
    if r == 1.5 {
        return -sign;
    }

    let s = if r < 0.5 {
        (r * PI).sin()
    } else if r < 1.0 {
        ((1.0 - r) * PI).sin()
    } else if r < 1.5 {
        -((r - 1.0) * PI).sin()
    } else {
        -((2.0 - r) * PI).sin()
    };

    sign * s
}

/// cos(π·x), exact at integers and half-integers
pub fn cos_pi(x: f64) -> f64 {
    let r = x.abs() % 2.0;

    if r == 0.0 {
        return 1.0;
    }
    if r == 0.5 || r == 1.5 {
        return 0.0;
    }
    if r == 1.0 {
        return -1.0;
    }

    if r < 0.5 {
        (r * PI).cos()
    } else if r < 1.0 {
        -((1.0 - r) * PI).cos()
    } else if r < 1.5 {
        -((r - 1.0) * PI).cos()
    } else {
        ((2.0 - r) * PI).cos()
    }
}

/// e^{iπx} = cos(πx) + i·sin(πx) with the exact values of [`cos_pi`] and [`sin_pi`]
#[inline]
pub fn exp_i_pi(x: f64) -> Complex64 {
    Complex64::new(cos_pi(x), sin_pi(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mul_i() {
        let z = Complex64::new(3.0, -2.0);
        assert_eq!(mul_i(z), z * Complex64::i());
        assert_eq!(mul_neg_i(z), z * -Complex64::i());
    }

    #[test]
    fn test_checked_div() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, -4.0);
        let q = checked_div(a, b).unwrap();
        assert_relative_eq!(q.re, -0.2, epsilon = 1e-15);
        assert_relative_eq!(q.im, 0.4, epsilon = 1e-15);

        // Components near the top of the f64 range
        let big = Complex64::new(1e300, 1e300);
        let q = checked_div(big, big).unwrap();
        assert_relative_eq!(q.re, 1.0, epsilon = 1e-15);
        assert_relative_eq!(q.im, 0.0, epsilon = 1e-15);

        let err = checked_div(a, Complex64::new(0.0, 0.0)).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_principal_sqrt() {
        let r = principal_sqrt(Complex64::new(-4.0, 0.0));
        assert_eq!(r, Complex64::new(0.0, 2.0));
        let r = principal_sqrt(Complex64::new(-4.0, -0.0));
        assert_eq!(r, Complex64::new(0.0, 2.0));

        let r = principal_sqrt(Complex64::new(0.0, 2.0));
        assert_relative_eq!(r.re, 1.0, epsilon = 1e-15);
        assert_relative_eq!(r.im, 1.0, epsilon = 1e-15);

        let r = principal_sqrt(Complex64::new(-1.0, -1e-20));
        assert!(r.re >= 0.0);
        assert!(r.im < 0.0);
    }

    #[test]
    fn test_principal_pow() {
        let zero = Complex64::new(0.0, 0.0);
        assert_eq!(principal_pow(zero, 2.5).unwrap(), zero);
        assert_eq!(principal_pow(zero, 0.0).unwrap(), Complex64::new(1.0, 0.0));
        assert!(principal_pow(zero, -1.0).unwrap_err().is_domain());

        let r = principal_pow(Complex64::new(-8.0, 0.0), 1.0 / 3.0).unwrap();
        // arg = π/3 on the principal branch
        assert_relative_eq!(r.re, 1.0, epsilon = 1e-14);
        assert_relative_eq!(r.im, 3.0_f64.sqrt(), epsilon = 1e-14);

        let r = principal_pow(Complex64::new(2.0, 0.0), 10.0).unwrap();
        assert_relative_eq!(r.re, 1024.0, max_relative = 1e-14);
        assert_relative_eq!(r.im, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_sin_cos_pi_exact() {
        for n in -6..=6 {
            let x = n as f64;
            assert_eq!(sin_pi(x), 0.0);
            assert_eq!(cos_pi(x), if n % 2 == 0 { 1.0 } else { -1.0 });
            assert_eq!(cos_pi(x + 0.5), 0.0);
            assert_eq!(sin_pi(x + 0.5).abs(), 1.0);
        }
        assert_eq!(sin_pi(1.5), -1.0);
        assert_eq!(sin_pi(-0.5), -1.0);

        assert_relative_eq!(sin_pi(0.25), (PI / 4.0).sin(), epsilon = 1e-15);
        assert_relative_eq!(cos_pi(1.3), (1.3 * PI).cos(), epsilon = 1e-15);
        assert_relative_eq!(sin_pi(-2.7), (-2.7 * PI).sin(), epsilon = 1e-14);
    }

    #[test]
    fn test_exp_i_pi() {
        assert_eq!(exp_i_pi(1.0), Complex64::new(-1.0, 0.0));
        assert_eq!(exp_i_pi(0.5), Complex64::new(0.0, 1.0));
        assert_eq!(exp_i_pi(-0.5), Complex64::new(0.0, -1.0));
    }
}
