//! High-level call surface for discrete calculus.
//!
//! ## Purpose
//!
//! This module is the crate's public boundary. It resolves method names to
//! their closed identifiers exactly once, validates the inputs, and
//! dispatches to the formula sweeps.
//!
//! ## Design notes
//!
//! * **Resolve Once**: String vocabulary is handled here and nowhere else;
//!   past this boundary an unrecognized method is unrepresentable.
//! * **Validate First**: Every fallible operation checks its preconditions
//!   before any formula executes. No partial results.
//! * **Typed Variants**: Each string-keyed operation has a `_with` variant
//!   taking the method identifier directly.
//!
//! ## Key concepts
//!
//! * **Uniform vs. Non-Uniform**: every operation exists in a coordinate-grid
//!   form and a fixed-step (`delta`) form; the underlying formulas differ.
//!
//! ### Call Flow
//!
//! 1. Resolve the method name via `from_name` (string-keyed functions only).
//! 2. Validate dimensions and minimum sample counts.
//! 3. Run the sweep and return the freshly allocated result.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::differentiation::{derivative_on_grid, derivative_uniform};
use crate::algorithms::integration::{quadrature_on_grid, quadrature_uniform};
use crate::engine::validator::Validator;
use crate::math::sequence;

// Publicly re-exported types
pub use crate::math::method::{DifferenceMethod, QuadratureMethod};
pub use crate::primitives::errors::DiscalcError;

// ============================================================================
// Sequence Construction
// ============================================================================

/// Build an evenly spaced sequence of `count` values starting at `start`.
///
/// The step is `(end - start) / count`, so the sequence spans the half-open
/// interval `[start, end)`; `end` itself is never an element. A `count` of 1
/// yields `[start]`.
///
/// # Example
///
/// ```rust
/// use discalc::prelude::*;
///
/// let grid: Vec<f64> = linspace(0.0, 10.0, 5);
/// assert_eq!(grid, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
/// ```
pub fn linspace<T: Float>(start: T, end: T, count: usize) -> Vec<T> {
    sequence::linspace(start, end, count)
}

// ============================================================================
// Cumulative Reduction
// ============================================================================

/// Total sum of a sequence. An empty sequence reduces to 0.
pub fn cumulative_sum<T: Float>(values: &[T]) -> T {
    sequence::cumulative_sum(values)
}

/// Total product of a sequence. An empty sequence reduces to 1.
pub fn cumulative_product<T: Float>(values: &[T]) -> T {
    sequence::cumulative_product(values)
}

// ============================================================================
// Differentiation
// ============================================================================

/// Differentiate sampled values over an explicit coordinate sequence.
///
/// `method` is resolved against the differentiation vocabulary
/// (`"middle"`, `"forward"`, `"backward"`); see
/// [`DifferenceMethod::from_name`].
///
/// # Errors
///
/// * [`DiscalcError::UnknownMethod`] if `method` is not in the vocabulary.
/// * [`DiscalcError::MismatchedInputs`] if the sequences differ in length.
/// * [`DiscalcError::TooFewPoints`] if fewer than 2 samples are supplied.
pub fn differentiate<T: Float>(
    values: &[T],
    coordinates: &[T],
    method: &str,
) -> Result<Vec<T>, DiscalcError> {
    differentiate_with(values, coordinates, DifferenceMethod::from_name(method)?)
}

/// Differentiate sampled values over a uniform grid with step `delta`.
///
/// # Errors
///
/// * [`DiscalcError::UnknownMethod`] if `method` is not in the vocabulary.
/// * [`DiscalcError::TooFewPoints`] if fewer than 2 samples are supplied.
pub fn differentiate_uniform<T: Float>(
    values: &[T],
    delta: T,
    method: &str,
) -> Result<Vec<T>, DiscalcError> {
    differentiate_uniform_with(values, delta, DifferenceMethod::from_name(method)?)
}

/// Differentiate over an explicit coordinate sequence with a resolved method.
pub fn differentiate_with<T: Float>(
    values: &[T],
    coordinates: &[T],
    method: DifferenceMethod,
) -> Result<Vec<T>, DiscalcError> {
    Validator::validate_grid(values, coordinates)?;
    Validator::validate_min_points(values.len(), method.min_points())?;
    Ok(derivative_on_grid(values, coordinates, method))
}

/// Differentiate over a uniform grid with a resolved method.
pub fn differentiate_uniform_with<T: Float>(
    values: &[T],
    delta: T,
    method: DifferenceMethod,
) -> Result<Vec<T>, DiscalcError> {
    Validator::validate_min_points(values.len(), method.min_points())?;
    Ok(derivative_uniform(values, delta, method))
}

// ============================================================================
// Integration
// ============================================================================

/// Integrate sampled values over an explicit coordinate sequence.
///
/// `method` is resolved against the integration vocabulary
/// (`"trapez"`, `"simpson"`, `"midpoint"`); see
/// [`QuadratureMethod::from_name`].
///
/// The Simpson rule strides interior pairs two at a time; with an even
/// sample count the final interval receives no parabolic contribution
/// beyond the boundary terms. Supply an odd sample count for full coverage.
///
/// # Errors
///
/// * [`DiscalcError::UnknownMethod`] if `method` is not in the vocabulary.
/// * [`DiscalcError::MismatchedInputs`] if the sequences differ in length.
/// * [`DiscalcError::TooFewPoints`] if the sequence is shorter than the
///   rule's minimum (2, or 3 for Simpson).
pub fn integrate<T: Float>(
    values: &[T],
    coordinates: &[T],
    method: &str,
) -> Result<T, DiscalcError> {
    integrate_with(values, coordinates, QuadratureMethod::from_name(method)?)
}

/// Integrate sampled values over a uniform grid with step `delta`.
///
/// The Simpson parity caveat of [`integrate`] applies here as well.
///
/// # Errors
///
/// * [`DiscalcError::UnknownMethod`] if `method` is not in the vocabulary.
/// * [`DiscalcError::TooFewPoints`] if the sequence is shorter than the
///   rule's minimum (2, or 3 for Simpson).
pub fn integrate_uniform<T: Float>(
    values: &[T],
    delta: T,
    method: &str,
) -> Result<T, DiscalcError> {
    integrate_uniform_with(values, delta, QuadratureMethod::from_name(method)?)
}

/// Integrate over an explicit coordinate sequence with a resolved method.
pub fn integrate_with<T: Float>(
    values: &[T],
    coordinates: &[T],
    method: QuadratureMethod,
) -> Result<T, DiscalcError> {
    Validator::validate_grid(values, coordinates)?;
    Validator::validate_min_points(values.len(), method.min_points())?;
    Ok(quadrature_on_grid(values, coordinates, method))
}

/// Integrate over a uniform grid with a resolved method.
pub fn integrate_uniform_with<T: Float>(
    values: &[T],
    delta: T,
    method: QuadratureMethod,
) -> Result<T, DiscalcError> {
    Validator::validate_min_points(values.len(), method.min_points())?;
    Ok(quadrature_uniform(values, delta, method))
}
