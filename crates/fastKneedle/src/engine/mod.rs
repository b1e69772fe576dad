//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for Kneedle detection.
//! It distributes the smoothing stage across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
