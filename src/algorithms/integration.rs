//! Composite quadrature sweeps.
//!
//! ## Purpose
//!
//! This module reduces sampled function values to a single definite-integral
//! estimate, over either an explicit coordinate sequence or a fixed step
//! size, using one of three rules (trapezoid, Simpson, midpoint).
//!
//! ## Design notes
//!
//! * **Distinct Forms**: The non-uniform and uniform forms of each rule are
//!   separate formulas with their own boundary terms, not rearrangements of
//!   one another. The midpoint rule weights its boundary samples by 1/4 of
//!   the adjacent spacing on a coordinate grid but by 1/2 of `delta` on a
//!   uniform grid.
//! * **Simpson Parity**: The Simpson sweep strides interior pairs two at a
//!   time and assumes an even interval count (odd sample count). With an
//!   even sample count the final interval receives no parabolic
//!   contribution beyond the boundary terms.
//! * **Unchecked Kernels**: Functions here assume validated inputs; the
//!   engine layer enforces the preconditions.
//!
//! ## Key concepts
//!
//! * **Composite rule**: a quadrature rule applied piecewise across
//!   sub-intervals of the sampled domain.
//! * **Boundary terms**: explicit end-sample contributions added after the
//!   interior sweep.
//!
//! ## Invariants
//!
//! * Accumulation is a single left-to-right pass; results are deterministic.
//! * No allocation beyond the scalar accumulator.
//!
//! ## Non-goals
//!
//! * This module does not validate input dimensions or lengths.
//! * This module does not estimate quadrature error or refine step sizes.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::method::QuadratureMethod;

// ============================================================================
// Non-Uniform Grid
// ============================================================================

/// Integrate sampled values over an explicit coordinate sequence.
///
/// # Preconditions
///
/// * `values.len() == coordinates.len()`
/// * `values.len() >= 2` (`>= 3` for Simpson)
pub fn quadrature_on_grid<T: Float>(
    values: &[T],
    coordinates: &[T],
    method: QuadratureMethod,
) -> T {
    let n = values.len();
    let half = T::from(0.5).unwrap();
    let mut integral = T::zero();

    match method {
        QuadratureMethod::Trapezoid => {
            for i in 0..n - 1 {
                integral = integral
                    + half * (values[i + 1] + values[i]) * (coordinates[i + 1] - coordinates[i]);
            }
        }
        QuadratureMethod::Simpson => {
            let three = T::from(3.0).unwrap();
            let four = T::from(4.0).unwrap();
            let six = T::from(6.0).unwrap();
            let two = T::from(2.0).unwrap();

            for i in (0..n - 2).step_by(2) {
                integral = integral
                    + ((coordinates[i + 2] - coordinates[i + 1]) / three)
                        * (four * values[i + 1] + two * values[i + 2]);
            }
            integral = integral + ((coordinates[1] - coordinates[0]) / six) * values[0];
            integral = integral
                + ((coordinates[n - 1] - coordinates[n - 2]) / six) * values[n - 1];
        }
        QuadratureMethod::Midpoint => {
            let quarter = T::from(0.25).unwrap();

            for i in 1..n - 1 {
                integral =
                    integral + half * values[i] * (coordinates[i + 1] - coordinates[i - 1]);
            }
            integral = integral + quarter * values[0] * (coordinates[1] - coordinates[0]);
            integral = integral
                + quarter * values[n - 1] * (coordinates[n - 1] - coordinates[n - 2]);
        }
    }

    integral
}

// ============================================================================
// Uniform Grid
// ============================================================================

/// Integrate sampled values over a uniform grid with step `delta`.
///
/// # Preconditions
///
/// * `values.len() >= 2` (`>= 3` for Simpson)
pub fn quadrature_uniform<T: Float>(values: &[T], delta: T, method: QuadratureMethod) -> T {
    let n = values.len();
    let half = T::from(0.5).unwrap();
    let mut integral = T::zero();

    match method {
        QuadratureMethod::Trapezoid => {
            for i in 0..n - 1 {
                integral = integral + half * (values[i + 1] + values[i]) * delta;
            }
        }
        QuadratureMethod::Simpson => {
            let third_delta = delta / T::from(3.0).unwrap();
            let four = T::from(4.0).unwrap();
            let two = T::from(2.0).unwrap();

            for i in (0..n - 2).step_by(2) {
                integral = integral + third_delta * (four * values[i + 1] + two * values[i + 2]);
            }
            integral = integral + third_delta * (values[0] + values[n - 1]);
        }
        QuadratureMethod::Midpoint => {
            for i in 1..n - 1 {
                integral = integral + values[i] * delta;
            }
            integral = integral + half * values[0] * delta;
            integral = integral + half * values[n - 1] * delta;
        }
    }

    integral
}
