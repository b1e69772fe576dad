//! Reproducible curve generators for the fastKneedle benchmarks.
//!
//! Every generator takes a seed so that runs are comparable across machines
//! and backends.

#![allow(non_snake_case)]

use rand::prelude::*;
use rand_distr::Normal;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Saturating curve `1 - exp(-x)` with Gaussian noise; its knee lies near x = 1.
pub fn generate_saturating_curve(size: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.01).unwrap();

    (0..size)
        .map(|i| {
            let x = i as f64 * 8.0 / size as f64;
            [x, 1.0 - (-x).exp() + noise_dist.sample(&mut rng)]
        })
        .collect()
}

/// Convex, increasing curve `exp(x)` with relative noise; it has an elbow.
pub fn generate_convex_curve(size: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.02).unwrap();

    (0..size)
        .map(|i| {
            let x = i as f64 * 5.0 / size as f64;
            [x, x.exp() * (1.0 + noise_dist.sample(&mut rng))]
        })
        .collect()
}

/// Cumulative explained variance of a decaying spectrum (clusters vs. variance).
pub fn generate_explained_variance(size: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(1.0_f64, 0.05).unwrap();

    let mut total = 0.0;
    (0..size)
        .map(|i| {
            let component = (-(i as f64) / 20.0).exp() * noise_dist.sample(&mut rng).abs();
            total += component;
            [(i + 1) as f64, total]
        })
        .collect()
}

/// Pure Gaussian noise around a flat line; many candidates, few confirmations.
pub fn generate_noise(size: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 1.0).unwrap();

    (0..size)
        .map(|i| [i as f64, noise_dist.sample(&mut rng)])
        .collect()
}
