//! Input validation for discrete-calculus operations.
//!
//! ## Purpose
//!
//! This module provides the validation functions run at the call boundary
//! of the differentiation and integration operations. It checks dimension
//! agreement and per-formula minimum sample counts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Before Any Formula**: Violations surface as explicit errors; a sweep
//!   never runs on malformed data and never returns a partial result.
//!
//! ## Key concepts
//!
//! * **Dimension Agreement**: value and coordinate sequences must have equal
//!   length; this is an invariant, not an optional check.
//! * **Stencil Requirements**: each method's formula reads a minimum number
//!   of samples, reported by the method identifier.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A passing validation guarantees the sweeps index in bounds.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not resolve method names.

// Internal dependencies
use crate::primitives::errors::DiscalcError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for discrete-calculus inputs.
///
/// Provides static methods returning `Result<(), DiscalcError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate dimension agreement between values and coordinates.
    pub fn validate_grid<T>(values: &[T], coordinates: &[T]) -> Result<(), DiscalcError> {
        if values.len() != coordinates.len() {
            return Err(DiscalcError::MismatchedInputs {
                values_len: values.len(),
                coordinates_len: coordinates.len(),
            });
        }
        Ok(())
    }

    /// Validate that a sequence meets a formula's minimum sample count.
    pub fn validate_min_points(n: usize, min: usize) -> Result<(), DiscalcError> {
        if n < min {
            return Err(DiscalcError::TooFewPoints { got: n, min });
        }
        Ok(())
    }
}
