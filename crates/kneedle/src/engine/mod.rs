//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a detection run by coordinating primitives (value
//! types, errors) and algorithms (smoothing, extrema, confirmation). It also
//! owns input validation and the result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline orchestration.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for Kneedle operations.
pub mod output;
