//! Linearly spaced sequences and cumulative reductions.
//!
//! ## Purpose
//!
//! This module constructs evenly spaced sample sequences and folds existing
//! sequences into their total sum or total product. These are the grid-side
//! building blocks consumed by callers of the differentiation and
//! integration sweeps.
//!
//! ## Design notes
//!
//! * **Half-Open Span**: `linspace` divides by `count`, not `count - 1`; the
//!   generated sequence spans `[start, end)` and never contains `end`.
//! * **Identity Seeds**: Reductions fold from the additive (0) or
//!   multiplicative (1) identity, so empty sequences reduce to the identity.
//! * **Generics**: All functions are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Uniform grid**: `linspace` output has constant spacing `(end - start) / count`.
//! * **Degenerate counts**: a single-element sequence is just `[start]`.
//!
//! ## Invariants
//!
//! * `linspace(start, end, count).len() == count`.
//! * Reductions are O(n) time and O(1) auxiliary space.
//!
//! ## Non-goals
//!
//! * This module does not generate non-uniform grids.
//! * This module does not compute prefix (per-element) scans.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Sequence Construction
// ============================================================================

/// Build an evenly spaced sequence of `count` values starting at `start`.
///
/// The step is `(end - start) / count`, so the sequence covers the half-open
/// interval `[start, end)`; `end` itself is never an element.
///
/// # Preconditions
///
/// * `count >= 1`. A `count` of 1 yields `[start]` (`end` is ignored), and a
///   `count` of 0 yields an empty sequence without evaluating the step.
pub fn linspace<T: Float>(start: T, end: T, count: usize) -> Vec<T> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }

    let step = (end - start) / T::from(count).unwrap();
    (0..count)
        .map(|i| start + T::from(i).unwrap() * step)
        .collect()
}

// ============================================================================
// Cumulative Reductions
// ============================================================================

/// Total sum of a sequence, seeded at the additive identity.
///
/// An empty sequence reduces to 0.
pub fn cumulative_sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Total product of a sequence, seeded at the multiplicative identity.
///
/// An empty sequence reduces to 1.
pub fn cumulative_product<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::one(), |acc, &v| acc * v)
}
