/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

use artmie_rs::bessel::{besselj, bessely, BesselEngine};
use artmie_rs::mie::MieCalculator;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_complex::Complex64;

fn bessel_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bessel Functions");

    group.bench_function("besselj_series", |b| {
        b.iter(|| {
            for i in 1..100 {
                black_box(besselj(black_box(2.5), Complex64::new(i as f64 * 0.1, 0.5)).ok());
            }
        })
    });

    group.bench_function("bessely_recurrence", |b| {
        b.iter(|| {
            for i in 1..100 {
                black_box(bessely(black_box(30.3), Complex64::new(12.0 + i as f64, -1.0)).ok());
            }
        })
    });

    group.bench_function("bessely_asymptotic", |b| {
        b.iter(|| {
            for i in 1..100 {
                black_box(bessely(black_box(1.5), Complex64::new(50.0 + i as f64, 2.0)).ok());
            }
        })
    });

    group.bench_function("evaluate_batch", |b| {
        let engine = BesselEngine::default();
        let inputs: Vec<(f64, Complex64)> = (0..1000)
            .map(|i| (i as f64 * 0.05, Complex64::new(1.0 + i as f64 * 0.02, 0.3)))
            .collect();
        b.iter(|| black_box(engine.evaluate_batch(black_box(&inputs))))
    });

    group.finish();
}

fn mie_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mie Scattering");
    let calculator = MieCalculator::default();

    group.bench_function("efficiencies_x10", |b| {
        b.iter(|| black_box(calculator.efficiencies(black_box(10.0), Complex64::new(1.33, 0.01))))
    });

    group.finish();
}

criterion_group!(benches, bessel_benchmark, mie_benchmark);
criterion_main!(benches);
