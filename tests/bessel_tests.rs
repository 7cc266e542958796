/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

use approx::assert_relative_eq;
use artmie_rs::bessel::{
    besselj, bessely, hankel, select_method, BesselEngine, CutSide, EngineConfig, HankelKind,
    Method,
};
use artmie_rs::NumericError;
use num_complex::Complex64;
use rstest::rstest;
use std::f64::consts::PI;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn assert_complex_close(actual: Complex64, expected: Complex64, tolerance: f64) {
    let scale = expected.norm().max(1e-300);
    assert!(
        (actual - expected).norm() / scale < tolerance,
        "actual {} expected {}",
        actual,
        expected
    );
}

/// H = J ± iY holds up to rounding relative to |J| + |Y|
fn assert_composition(h: Complex64, j: Complex64, y: Complex64, kind: HankelKind) {
    let composed = match kind {
        HankelKind::First => j + Complex64::i() * y,
        HankelKind::Second => j - Complex64::i() * y,
    };
    let scale = j.norm() + y.norm();
    assert!(
        (h - composed).norm() / scale < 1e-14,
        "{}: {} vs {}",
        kind,
        h,
        composed
    );
}

#[test]
fn test_reference_values() {
    let one = c(1.0, 0.0);
    let j = besselj(0.0, one).unwrap();
    assert_relative_eq!(j.re, 0.765_197_686_6, epsilon = 1e-10);
    assert_eq!(j.im, 0.0);

    let h = hankel(0.0, one, HankelKind::First).unwrap();
    assert_relative_eq!(h.re, 0.765_197_686_6, epsilon = 1e-10);
    assert_relative_eq!(h.im, 0.088_256_964_2, epsilon = 1e-10);

    let h2 = hankel(0.0, one, HankelKind::Second).unwrap();
    assert_relative_eq!(h2.im, -0.088_256_964_2, epsilon = 1e-10);
}

#[test]
fn test_neumann_at_origin_is_domain_error() {
    let err = bessely(0.0, c(0.0, 0.0)).unwrap_err();
    assert!(matches!(err, NumericError::Domain(_)));
    assert!(hankel(1.0, c(0.0, 0.0), HankelKind::First)
        .unwrap_err()
        .is_domain());
}

#[test]
fn test_invalid_hankel_kind() {
    assert!(HankelKind::try_from(3_i64).unwrap_err().is_domain());
}

#[rstest]
#[case(0.0, c(1.0, 0.0))]
#[case(2.5, c(3.0, 4.0))]
#[case(-1.3, c(0.5, -0.2))]
#[case(7.0, c(-8.0, 2.0))]
#[case(15.2, c(30.0, -1.0))]
#[case(0.75, c(60.0, 0.5))]
fn test_hankel_composition(#[case] nu: f64, #[case] z: Complex64) {
    let j = besselj(nu, z).unwrap();
    let y = bessely(nu, z).unwrap();
    let h1 = hankel(nu, z, HankelKind::First).unwrap();
    let h2 = hankel(nu, z, HankelKind::Second).unwrap();

    assert_composition(h1, j, y, HankelKind::First);
    assert_composition(h2, j, y, HankelKind::Second);
}

// Values exponentially smaller than J, where J ± iY cancels completely
#[rstest]
#[case(
    2.5,
    c(3.0, 40.0),
    HankelKind::First,
    c(-4.455_402_895_815_833e-19, -3.652_480_461_059_802e-19)
)]
#[case(
    55.984,
    c(-74.55, 81.52),
    HankelKind::First,
    c(-7.575_083_574_040_442e-33, 9.617_751_169_105_011e-33)
)]
#[case(
    10.5,
    c(-3.0, 8.0),
    HankelKind::First,
    c(-0.012_599_334_259_301_199, 0.017_145_138_632_311_232)
)]
#[case(
    -1.2,
    c(2.0, -18.0),
    HankelKind::Second,
    c(-2.118_923_929_475_538e-9, -2.049_166_726_350_942_3e-9)
)]
#[case(
    -7.851,
    c(-207.8, -89.34),
    HankelKind::Second,
    c(-8.740_137_507_737_428e-41, 1.545_625_737_492_592_2e-41)
)]
#[case(
    12.5,
    c(-30.0, -60.0),
    HankelKind::Second,
    c(-2.666_095_911_671_222_5e-28, 2.384_527_150_468_257_6e-27)
)]
#[case(
    44.568,
    c(-64.96, -53.41),
    HankelKind::Second,
    c(2.601_301_550_959_857_3e-22, 1.242_510_547_272_656_2e-21)
)]
fn test_recessive_hankel(
    #[case] nu: f64,
    #[case] z: Complex64,
    #[case] kind: HankelKind,
    #[case] expected: Complex64,
) {
    let h = hankel(nu, z, kind).unwrap();
    assert_complex_close(h, expected, 1e-9);

    let evaluation = BesselEngine::default().evaluate(nu, z).unwrap();
    assert_eq!(evaluation.hankel(kind), h);
    assert_composition(h, evaluation.j, evaluation.y, kind);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(6)]
fn test_integer_order_reflection(#[case] n: i32) {
    let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
    for z in [c(0.7, 0.0), c(4.0, -2.0), c(-15.0, 3.0), c(25.0, 0.0)] {
        let positive = besselj(n as f64, z).unwrap();
        let negative = besselj(-(n as f64), z).unwrap();
        assert_eq!(negative, positive * sign);
    }
}

#[rstest]
#[case(0.0, c(1.0, 0.0))]
#[case(0.3, c(1.5, 1.0))]
#[case(4.5, c(6.0, -3.0))]
#[case(12.7, c(20.0, 5.0))]
#[case(2.2, c(-9.0, 4.0))]
#[case(40.0, c(55.0, -2.0))]
#[case(1.1, c(100.0, 10.0))]
#[case(-2.6, c(3.0, 0.5))]
fn test_wronskian(#[case] nu: f64, #[case] z: Complex64) {
    let j0 = besselj(nu, z).unwrap();
    let j1 = besselj(nu + 1.0, z).unwrap();
    let y0 = bessely(nu, z).unwrap();
    let y1 = bessely(nu + 1.0, z).unwrap();

    let expected = -2.0 / (PI * z);
    let first = j0 * y1;
    let second = j1 * y0;
    let scale = expected.norm().max(first.norm()).max(second.norm());
    assert!(
        (first - second - expected).norm() / scale < 1e-9,
        "nu={}, z={}",
        nu,
        z
    );
}

#[test]
fn test_idempotence() {
    for &(nu, z) in &[
        (0.0, c(1.0, 0.0)),
        (3.3, c(-5.0, 2.0)),
        (25.0, c(40.0, -1.0)),
        (0.5, c(200.0, 3.0)),
    ] {
        let engine = BesselEngine::default();
        let first = engine.evaluate(nu, z).unwrap();
        let second = engine.evaluate(nu, z).unwrap();
        assert_eq!(first.j.re.to_bits(), second.j.re.to_bits());
        assert_eq!(first.j.im.to_bits(), second.j.im.to_bits());
        assert_eq!(first.y.re.to_bits(), second.y.re.to_bits());
        assert_eq!(first.y.im.to_bits(), second.y.im.to_bits());
    }
}

#[test]
fn test_real_argument_gives_real_values() {
    for &(nu, x) in &[(0.0, 0.3), (2.5, 7.0), (17.0, 15.0), (1.5, 80.0), (-0.4, 2.0)] {
        let j = besselj(nu, c(x, 0.0)).unwrap();
        let y = bessely(nu, c(x, 0.0)).unwrap();
        assert_eq!(j.im, 0.0);
        assert_eq!(y.im, 0.0);
    }
}

#[test]
fn test_negative_real_axis_default_side() {
    // The negative real axis belongs to the upper side: arg z = π
    let y = bessely(0.0, c(-3.0, 0.0)).unwrap();
    assert_complex_close(y, c(0.376_850_010_012_790_4, -0.520_103_909_803_866_9), 1e-10);

    let j = besselj(0.5, c(-3.0, 0.0)).unwrap();
    assert_complex_close(j, c(0.0, 0.065_008_182_877_375_78), 1e-10);

    // A negative zero imaginary part does not switch sides
    let j_neg_zero = besselj(0.5, c(-3.0, -0.0)).unwrap();
    assert_eq!(j_neg_zero, j);

    let y = bessely(2.5, c(-4.0, 0.0)).unwrap();
    assert_complex_close(y, c(0.0, -0.014_567_947_668_521_801), 1e-10);
}

#[test]
fn test_negative_real_axis_lower_side() {
    let engine = BesselEngine::new(EngineConfig {
        cut_side: CutSide::Lower,
        ..EngineConfig::default()
    });
    let j = engine.besselj(0.5, c(-3.0, 0.0)).unwrap();
    assert_complex_close(j, c(0.0, -0.065_008_182_877_375_78), 1e-10);

    let y = engine.bessely(0.0, c(-3.0, 0.0)).unwrap();
    assert_complex_close(y, c(0.376_850_010_012_790_4, 0.520_103_909_803_866_9), 1e-10);

    // Off the axis the configured side plays no role
    let z = c(-3.0, 0.25);
    assert_eq!(
        engine.besselj(1.5, z).unwrap(),
        BesselEngine::default().besselj(1.5, z).unwrap()
    );
}

#[test]
fn test_cut_limit_from_above() {
    let on_cut = besselj(1.3, c(-6.0, 0.0)).unwrap();
    let above = besselj(1.3, c(-6.0, 1e-10)).unwrap();
    assert_complex_close(above, on_cut, 1e-8);
}

#[test]
fn test_dispatch_policy() {
    let config = EngineConfig::default();
    assert_eq!(select_method(3.0, 11.9, &config), Method::Series);
    assert_eq!(select_method(3.0, 12.1, &config), Method::Asymptotic);
    assert_eq!(select_method(10.0, 50.0, &config), Method::Recurrence);
    assert_eq!(select_method(10.0, 100.0, &config), Method::Asymptotic);
}

#[test]
fn test_methods_agree_across_thresholds() {
    let default_engine = BesselEngine::default();
    let shifted = BesselEngine::new(EngineConfig {
        series_radius: 10.0,
        temme_radius: 3.0,
        ..EngineConfig::default()
    });

    // Series on the default engine, recurrence on the shifted one
    for &(nu, z) in &[(3.3, c(10.5, 3.0)), (0.2, c(9.0, -7.0)), (6.0, c(11.5, 0.0))] {
        let a = default_engine.evaluate(nu, z).unwrap();
        let b = shifted.evaluate(nu, z).unwrap();
        assert_complex_close(b.j, a.j, 1e-8);
        assert_complex_close(b.y, a.y, 1e-8);
    }

    // Steed seeds on the default engine, Temme seeds on the shifted one
    let z = c(2.5, 0.5);
    let a = default_engine.evaluate(4.2, z).unwrap();
    let b = shifted.evaluate(4.2, z).unwrap();
    assert_complex_close(b.y, a.y, 1e-10);
}

#[test]
fn test_large_order_overflow_and_underflow() {
    // J underflows to zero, Y overflows
    let j = besselj(400.0, c(1.0, 0.0)).unwrap();
    assert_eq!(j, c(0.0, 0.0));
    let err = bessely(400.0, c(1.0, 0.0)).unwrap_err();
    assert!(err.is_overflow());
}

#[test]
fn test_no_precision_warning_for_ordinary_arguments() {
    let engine = BesselEngine::default();
    let evaluation = engine.evaluate(5.5, c(7.0, -2.0)).unwrap();
    assert!(evaluation.warning.is_none());
    assert_composition(
        evaluation.hankel(HankelKind::First),
        evaluation.j,
        evaluation.y,
        HankelKind::First,
    );
}

#[test]
fn test_precision_warning_is_not_fatal() {
    // Series regime only, so the tolerance reaches nothing but the Wronskian check
    let engine = BesselEngine::new(EngineConfig {
        tolerance: 1e-30,
        ..EngineConfig::default()
    });
    let (nu, z) = (2.37, c(1.73, 0.91));

    let evaluation = engine.evaluate(nu, z).unwrap();
    let warning = evaluation.warning.clone().unwrap();
    assert_eq!(warning.nu, nu);
    assert_eq!(warning.z, z);
    assert_eq!(warning.tolerance, 1e-30);
    assert!(warning.residual > warning.tolerance);
    assert!(warning.residual < 1e-12);

    // Same values as without the warning
    let reference = BesselEngine::default().evaluate(nu, z).unwrap();
    assert!(reference.warning.is_none());
    assert_eq!(evaluation.j, reference.j);
    assert_eq!(evaluation.y, reference.y);

    assert_eq!(engine.bessely(nu, z).unwrap(), reference.y);
    assert_eq!(engine.hankel(nu, z, HankelKind::Second).unwrap(), reference.h2);
}
