//! Kneedle benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 100K points)
//! - Smoothing window radius
//! - Sensitivity
//! - Real-world scenarios (saturation, growth, explained variance)
//! - Pathological cases (pure noise, constant y)
//!
//! For serial execution, use `FASTKNEEDLE_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTKNEEDLE_BACKEND=parallel cargo bench`.

#![allow(non_snake_case)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastKneedle::prelude::*;
use fastKneedle_benchmarks::{
    generate_convex_curve, generate_explained_variance, generate_noise, generate_saturating_curve,
};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTKNEEDLE_BACKEND").ok().as_deref() {
        Some("cpu_serial") | Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

fn detector(window: usize, sensitivity: f64, mode: Mode, parallel: bool) -> ParallelKneedleDetector<f64> {
    Kneedle::new()
        .sensitivity(sensitivity)
        .smoothing_window(window)
        .mode(mode)
        .parallel(parallel)
        .build()
        .unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let curve = generate_saturating_curve(size, 42);
        let model = detector(3, 1.0, Knee, use_parallel);

        group.bench_with_input(BenchmarkId::new("knee", size), &size, |b, _| {
            b.iter(|| model.fit(black_box(&curve)).unwrap())
        });
    }
    group.finish();
}

fn bench_window(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("window_{}", mode_name));
    group.sample_size(100);

    let curve = generate_saturating_curve(10_000, 42);

    for window in [0, 1, 3, 10, 50, 200] {
        let model = detector(window, 1.0, Knee, use_parallel);
        group.bench_with_input(BenchmarkId::new("knee", window), &window, |b, _| {
            b.iter(|| model.fit(black_box(&curve)).unwrap())
        });
    }
    group.finish();
}

fn bench_sensitivity(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("sensitivity_{}", mode_name));
    group.sample_size(100);

    let curve = generate_noise(10_000, 42);

    for s in [0.0, 0.5, 1.0, 5.0, 50.0] {
        let model = detector(1, s, Elbow, use_parallel);
        group.bench_with_input(BenchmarkId::new("elbow", s), &s, |b, _| {
            b.iter(|| model.fit(black_box(&curve)).unwrap())
        });
    }
    group.finish();
}

fn bench_scenarios(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scenarios_{}", mode_name));
    group.sample_size(50);

    let size = 20_000;

    let saturating = generate_saturating_curve(size, 7);
    let knee_model = detector(5, 1.0, Knee, use_parallel);
    group.bench_function("saturation", |b| {
        b.iter(|| knee_model.fit(black_box(&saturating)).unwrap())
    });

    let convex = generate_convex_curve(size, 7);
    let elbow_model = detector(5, 1.0, Elbow, use_parallel);
    group.bench_function("growth", |b| {
        b.iter(|| elbow_model.fit(black_box(&convex)).unwrap())
    });

    let variance = generate_explained_variance(size, 7);
    group.bench_function("explained_variance", |b| {
        b.iter(|| knee_model.fit(black_box(&variance)).unwrap())
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(50);

    let size = 20_000;

    // Pure noise
    let noise = generate_noise(size, 42);
    let model = detector(0, 0.0, Knee, use_parallel);
    group.bench_function("pure_noise", |b| {
        b.iter(|| model.fit(black_box(&noise)).unwrap())
    });

    // Constant y
    let constant: Vec<[f64; 2]> = (0..size).map(|i| [i as f64, 5.0]).collect();
    let model = detector(3, 1.0, Knee, use_parallel);
    group.bench_function("constant_y", |b| {
        b.iter(|| model.fit(black_box(&constant)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_window,
    bench_sensitivity,
    bench_scenarios,
    bench_pathological,
);

criterion_main!(benches);
