//! # fastKneedle (Parallel Knee and Elbow Detection)
//!
//! A parallel front end for the [`kneedle`](https://docs.rs/kneedle) crate.
//! Detection results are identical to `kneedle`; the Gaussian smoothing stage
//! runs across all CPU cores and inputs may come straight from `ndarray`.
//!
//! ## What is Kneedle?
//!
//! Kneedle finds the points where a curve's rate of change transitions most
//! sharply: the "knee" of a concave curve or the "elbow" of a convex one. The
//! curve is smoothed, rescaled into the unit square, turned into its distance
//! from the diagonal, and every local extremum of that distance is confirmed
//! or rejected against a sensitivity-scaled threshold.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastKneedle::prelude::*;
//! use ndarray::array;
//!
//! let curve = array![
//!     [0.0, 0.0], [0.1, 0.55], [0.2, 0.75], [0.35, 0.825], [0.45, 0.875],
//!     [0.55, 0.9], [0.675, 0.925], [0.775, 0.95], [0.875, 0.975], [1.0, 1.0],
//! ];
//!
//! // Build the detector with parallel smoothing (default)
//! let detector = Kneedle::new()
//!     .sensitivity(1.0)     // Threshold scale
//!     .smoothing_window(1)  // Gaussian radius in index units
//!     .mode(Knee)           // Concave knees
//!     .build()?;
//!
//! let result = detector.fit(&curve)?;
//!
//! println!("{}", result);
//! # assert_eq!(result.indices, vec![2]);
//! # Result::<(), KneedleError>::Ok(())
//! ```
//!
//! ### Sequential Execution
//!
//! ```rust
//! use fastKneedle::prelude::*;
//!
//! let curve: Vec<[f64; 2]> = (0..100)
//!     .map(|i| {
//!         let x = i as f64 / 10.0;
//!         [x, 1.0 - (-x).exp()]
//!     })
//!     .collect();
//!
//! let detector = Kneedle::new()
//!     .parallel(false)      // Use the sequential kneedle pass
//!     .build()?;
//!
//! let result = detector.fit(&curve)?;
//! # Result::<(), KneedleError>::Ok(())
//! ```
//!
//! ## Supported Inputs
//!
//! | Input                     | Layout                          |
//! |---------------------------|---------------------------------|
//! | `[R]`, `[R; N]`, `Vec<R>` | rows with `R: AsRef<[T]>`       |
//! | `Curve<T>`                | typed points                    |
//! | `ndarray::Array2<T>`      | one row per point, two columns  |
//!
//! ## Feature Flags
//!
//! - **`cpu`** (default): Parallel smoothing via `rayon`. Without it the
//!   builder accepts `.parallel(true)` but smooths sequentially.
//! - **`dev`**: Exposes internal modules for testing.
//!
//! ## Logging
//!
//! Builders and runs emit [`tracing`](https://docs.rs/tracing) events at
//! `debug` and `trace` level. Install a subscriber to see them.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution.
mod engine;

// High-level fluent API for Kneedle detection.
mod api;

// Input data handling.
mod input;

pub use crate::api::run;

// Standard fastKneedle prelude.
pub mod prelude {
    pub use crate::api::{
        run, Curve, KneedleError, KneedleResult,
        Mode::{self, Elbow, Knee},
        ParallelKneedleBuilder as Kneedle, ParallelKneedleDetector, Point,
    };
    pub use crate::input::KneedleInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
