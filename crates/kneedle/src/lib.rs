//! # Kneedle (Knee and Elbow Detection)
//!
//! A small, dependency-light implementation of the Kneedle algorithm for
//! finding the points where a 2-D curve's rate of change transitions most
//! sharply.
//!
//! ## What is Kneedle?
//!
//! Many system-behavior curves (clusters vs. explained variance, cache size vs.
//! hit rate, compression level vs. ratio) rise or fall quickly and then
//! flatten out. The "knee" (concave curves) or "elbow" (convex curves) is where
//! extra cost stops buying much benefit, which makes it a natural default for
//! a tuning parameter.
//!
//! **How Kneedle works:**
//!
//! 1. Smooth the curve with a Gaussian kernel over `±window` index positions
//! 2. Rescale both axes independently into [0, 1]
//! 3. Replace each y with `y - x`; knees become local maxima, elbows local minima
//! 4. Confirm each extremum only if the curve after it moves past a threshold
//!    derived from the average x spacing and the sensitivity `S`
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use kneedle::prelude::*;
//!
//! let curve = vec![
//!     [0.0, 0.0], [0.1, 0.55], [0.2, 0.75], [0.35, 0.825], [0.45, 0.875],
//!     [0.55, 0.9], [0.675, 0.925], [0.775, 0.95], [0.875, 0.975], [1.0, 1.0],
//! ];
//!
//! // Build the detector
//! let detector = Kneedle::new()
//!     .sensitivity(1.0)     // Threshold scale
//!     .smoothing_window(1)  // Gaussian radius in index units
//!     .mode(Knee)           // Concave knees
//!     .build()?;
//!
//! // Detect
//! let result = detector.fit(&curve)?;
//!
//! println!("{}", result);
//! # assert_eq!(result.indices, vec![2]);
//! # Result::<(), KneedleError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points:      10
//!   Mode:             Knee
//!   Sensitivity:      1
//!   Smoothing window: 1
//!   Candidates:       1
//!   Confirmed:        1
//!
//! Knee Points:
//!    Index            X            Y        Score
//!   -----------------------------------------------
//!        2     0.200000     0.750000     0.456...
//! ```
//!
//! ### One-Call Form
//!
//! ```rust
//! # let curve = vec![[0.0, 0.0], [0.1, 0.55], [0.2, 0.75], [0.35, 0.825], [0.45, 0.875],
//! #     [0.55, 0.9], [0.675, 0.925], [0.775, 0.95], [0.875, 0.975], [1.0, 1.0]];
//! // (curve, sensitivity, smoothing_window, find_elbows)
//! let knees = kneedle::run(&curve, 1.0, 1, false)?;
//! # Result::<(), kneedle::prelude::KneedleError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns `Result<KneedleResult<T>, KneedleError>`. Errors are input
//! problems only: an empty curve (`EmptyInput`), a point that is not 2-D
//! (`DimensionMismatch`), a non-finite coordinate (`InvalidNumericValue`), or
//! a negative/non-finite sensitivity (`InvalidSensitivity`). When an error is
//! returned no computation took place.
//!
//! ```rust
//! use kneedle::prelude::*;
//!
//! let bad = vec![vec![0.0, 0.0, 0.0]];
//! match kneedle::run(&bad, 1.0, 1, true) {
//!     Err(KneedleError::DimensionMismatch { index, got, .. }) => {
//!         assert_eq!((index, got), (0, 3));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## Parameters
//!
//! | Parameter              | Default | Range/Options   | Description                                        |
//! |------------------------|---------|-----------------|----------------------------------------------------|
//! | **sensitivity**        | 1.0     | [0, ∞)          | Larger values confirm fewer, more pronounced points |
//! | **smoothing_window**   | 3       | [0, ∞)          | Gaussian radius in index units; 0 disables smoothing |
//! | **mode**               | `Knee`  | `Knee`, `Elbow` | Concave knees or convex elbows                     |
//! | **return_transformed** | false   | true/false      | Keep the prepared curve in the result              |
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! kneedle = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Runs are instrumented with [`tracing`](https://docs.rs/tracing): a `debug`
//! event summarizes each run and `trace` events record every candidate
//! decision. Nothing is emitted unless the application installs a subscriber.
//!
//! ## References
//!
//! - Satopää, V., Albrecht, J., Irwin, D., Raghavan, B. (2011). "Finding a
//!   'Kneedle' in a Haystack: Detecting Knee Points in System Behavior"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - value types and errors.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the Kneedle pipeline stages.
mod algorithms;

// Layer 4: Engine - orchestration, validation, output.
mod engine;

// High-level fluent API.
mod api;

pub use crate::api::run;

// Standard Kneedle prelude.
pub mod prelude {
    pub use crate::api::{
        gaussian_smooth, min_max_normalize, prepare, run, Curve, KneedleBuilder as Kneedle,
        KneedleDetector, KneedleError, KneedleResult,
        Mode::{self, Elbow, Knee},
        Point,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
