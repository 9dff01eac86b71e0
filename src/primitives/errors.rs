//! Error types for discrete-calculus operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when
//! differentiating or integrating sampled data: mismatched input lengths,
//! unrecognized method names, and sequences too short for a formula's
//! stencil.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Boundary-Checked**: Every variant is detected before any formula executes.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic names.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Mismatched value/coordinate lengths.
//! 2. **Method resolution**: Names outside the per-family vocabulary.
//! 3. **Stencil requirements**: Minimum sample counts per formula.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * An error is never accompanied by a partial result.
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

/// Error type for discrete-calculus operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscalcError {
    /// Value and coordinate sequences must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the value sequence.
        values_len: usize,
        /// Number of elements in the coordinate sequence.
        coordinates_len: usize,
    },

    /// Sequence length is below the minimum required by the selected formula.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Method name is outside the vocabulary of the operation family.
    UnknownMethod {
        /// The name that failed to resolve.
        name: String,
        /// Operation family the name was resolved against
        /// (`"differentiation"` or `"integration"`).
        family: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DiscalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs {
                values_len,
                coordinates_len,
            } => {
                write!(
                    f,
                    "Length mismatch: values has {values_len} points, coordinates has {coordinates_len}"
                )
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::UnknownMethod { name, family } => {
                write!(f, "Unknown {family} method: '{name}'")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DiscalcError {}
