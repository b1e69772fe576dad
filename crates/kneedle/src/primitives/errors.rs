//! Error types for Kneedle operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while preparing a
//! curve and detecting its knee or elbow points. All of them are input or
//! parameter validation failures; the numerical pipeline itself cannot fail
//! once its inputs are accepted.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending index or value where one exists.
//! * **Deferred**: Builder misuse (duplicate setters) is recorded and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape validation**: Empty curves and points that are not two-dimensional.
//! 2. **Numeric validation**: NaN or infinite coordinates and parameters.
//! 3. **Stage validation**: The dimension-generic smoother and normalizer reject
//!    empty, zero-dimensional, or ragged data with `InvalidInput`.
//!
//! ## Invariants
//!
//! * An error always means no computation result was produced.
//! * Numeric values in errors are reported as `f64` regardless of the input float type.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Kneedle operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KneedleError {
    /// The curve has no points.
    EmptyInput,

    /// A point does not have the dimensionality the detector requires.
    DimensionMismatch {
        /// Position of the first offending point.
        index: usize,
        /// Required number of coordinates.
        expected: usize,
        /// Number of coordinates found.
        got: usize,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Input data or a parameter contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Sensitivity must be finite and non-negative.
    InvalidSensitivity(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KneedleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input curve is empty"),
            Self::DimensionMismatch {
                index,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Dimension mismatch: point {index} has {got} coordinates, expected {expected}"
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidSensitivity(s) => {
                write!(f, "Invalid sensitivity: {s} (must be finite and >= 0)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KneedleError {}
