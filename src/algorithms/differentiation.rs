//! Finite-difference stencil sweeps.
//!
//! ## Purpose
//!
//! This module computes approximate derivative sequences from sampled
//! function values, over either an explicit coordinate sequence or a fixed
//! step size, using one of three stencils (central, forward, backward).
//!
//! ## Design notes
//!
//! * **Boundary Fallbacks**: Points a stencil cannot reach use the one-sided
//!   difference over the two nearest samples. For the central stencil this
//!   is a first-order fallback around a second-order interior formula, a
//!   deliberate trade-off.
//! * **Same-Length Output**: The derivative sequence always has the length
//!   of the input.
//! * **Unchecked Kernels**: Functions here assume validated inputs; the
//!   engine layer enforces the preconditions.
//!
//! ## Key concepts
//!
//! * **Stencil**: the fixed pattern of neighboring samples a formula reads.
//! * **One-sided difference**: forward or backward approximation used where
//!   a symmetric neighborhood does not exist.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Indices 0 and n-1 always hold their one-sided fallback values.
//!
//! ## Non-goals
//!
//! * This module does not validate input dimensions or lengths.
//! * This module does not provide higher-order or adaptive stencils.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::method::DifferenceMethod;

// ============================================================================
// Non-Uniform Grid
// ============================================================================

/// Differentiate sampled values over an explicit coordinate sequence.
///
/// # Preconditions
///
/// * `values.len() == coordinates.len()`
/// * `values.len() >= 2`
pub fn derivative_on_grid<T: Float>(
    values: &[T],
    coordinates: &[T],
    method: DifferenceMethod,
) -> Vec<T> {
    let n = values.len();
    let mut derivative = vec![T::zero(); n];

    match method {
        DifferenceMethod::Middle => {
            for i in 1..n - 1 {
                derivative[i] =
                    (values[i + 1] - values[i - 1]) / (coordinates[i + 1] - coordinates[i - 1]);
            }
            derivative[0] = (values[1] - values[0]) / (coordinates[1] - coordinates[0]);
            derivative[n - 1] =
                (values[n - 1] - values[n - 2]) / (coordinates[n - 1] - coordinates[n - 2]);
        }
        DifferenceMethod::Forward => {
            for i in 0..n - 1 {
                derivative[i] = (values[i + 1] - values[i]) / (coordinates[i + 1] - coordinates[i]);
            }
            derivative[n - 1] =
                (values[n - 1] - values[n - 2]) / (coordinates[n - 1] - coordinates[n - 2]);
        }
        DifferenceMethod::Backward => {
            for i in 1..n {
                derivative[i] = (values[i] - values[i - 1]) / (coordinates[i] - coordinates[i - 1]);
            }
            derivative[0] = (values[1] - values[0]) / (coordinates[1] - coordinates[0]);
        }
    }

    derivative
}

// ============================================================================
// Uniform Grid
// ============================================================================

/// Differentiate sampled values over a uniform grid with step `delta`.
///
/// # Preconditions
///
/// * `values.len() >= 2`
pub fn derivative_uniform<T: Float>(values: &[T], delta: T, method: DifferenceMethod) -> Vec<T> {
    let n = values.len();
    let mut derivative = vec![T::zero(); n];

    match method {
        DifferenceMethod::Middle => {
            let two_delta = T::from(2.0).unwrap() * delta;
            for i in 1..n - 1 {
                derivative[i] = (values[i + 1] - values[i - 1]) / two_delta;
            }
            derivative[0] = (values[1] - values[0]) / delta;
            derivative[n - 1] = (values[n - 1] - values[n - 2]) / delta;
        }
        DifferenceMethod::Forward => {
            for i in 0..n - 1 {
                derivative[i] = (values[i + 1] - values[i]) / delta;
            }
            derivative[n - 1] = (values[n - 1] - values[n - 2]) / delta;
        }
        DifferenceMethod::Backward => {
            for i in 1..n {
                derivative[i] = (values[i] - values[i - 1]) / delta;
            }
            derivative[0] = (values[1] - values[0]) / delta;
        }
    }

    derivative
}
