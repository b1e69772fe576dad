//! Input validation for Kneedle configuration and data.
//!
//! ## Purpose
//!
//! This module checks detector parameters and curve coordinates before any
//! computation runs. Shape (emptiness, two coordinates per point) is checked
//! when the curve is built; this module covers what the types cannot express.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::curve::Curve;
use crate::primitives::errors::KneedleError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for Kneedle configuration and input data.
///
/// All methods return `Result<(), KneedleError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that every coordinate of the curve is finite.
    pub fn validate_curve<T: Float>(curve: &Curve<T>) -> Result<(), KneedleError> {
        for (i, p) in curve.iter().enumerate() {
            if !p.x().is_finite() {
                return Err(KneedleError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    p.x().to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !p.y().is_finite() {
                return Err(KneedleError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    p.y().to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the sensitivity factor.
    pub fn validate_sensitivity<T: Float>(sensitivity: T) -> Result<(), KneedleError> {
        if !sensitivity.is_finite() || sensitivity < T::zero() {
            return Err(KneedleError::InvalidSensitivity(
                sensitivity.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), KneedleError> {
        if let Some(param) = duplicate_param {
            return Err(KneedleError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
