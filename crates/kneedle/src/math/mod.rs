//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout Kneedle:
//! - The Gaussian kernel behind index-based smoothing weights
//! - Min-max bounds for rescaling each dimension into [0, 1]
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian kernel and index-offset weights.
pub mod kernel;

/// Min-max range tracking and rescaling.
pub mod scaling;
