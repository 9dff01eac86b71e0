//! Method identifiers for differentiation and integration.
//!
//! ## Purpose
//!
//! This module defines the closed sets of numerical methods the crate
//! implements, one enum per operation family, together with their string
//! vocabulary and per-formula sample requirements.
//!
//! ## Design notes
//!
//! * **Closed Sets**: Each family is a field-less enum; dispatch is an exhaustive `match`.
//! * **Boundary Resolution**: Names resolve to identifiers exactly once, at the call boundary.
//! * **Exact Matching**: Resolution is case-sensitive against the fixed vocabulary.
//!
//! ## Key concepts
//!
//! * **Disjoint Vocabularies**: Differentiation and integration names never overlap.
//! * **Stencil Requirements**: Every method reports the minimum sample count its formula reads.
//!
//! ## Invariants
//!
//! * `from_name(m.name())` round-trips for every method `m`.
//! * After resolution, an unrecognized method is unrepresentable.
//!
//! ## Non-goals
//!
//! * This module does not implement the formulas themselves.
//! * This module does not validate input sequences.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// Internal dependencies
use crate::primitives::errors::DiscalcError;

// ============================================================================
// Difference Method
// ============================================================================

/// Finite-difference stencil for numerical differentiation.
///
/// Every stencil produces a derivative sequence of the same length as its
/// input; the points a formula cannot reach fall back to the one-sided
/// difference over the two nearest samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceMethod {
    /// Central difference: `(f[i+1] - f[i-1]) / (x[i+1] - x[i-1])` on
    /// interior points, one-sided differences at both boundaries.
    Middle,

    /// Forward difference: `(f[i+1] - f[i]) / (x[i+1] - x[i])`; the last
    /// point falls back to the backward formula.
    Forward,

    /// Backward difference: `(f[i] - f[i-1]) / (x[i] - x[i-1])`; the first
    /// point falls back to the forward formula.
    Backward,
}

impl DifferenceMethod {
    /// Get the wire name of the method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            DifferenceMethod::Middle => "middle",
            DifferenceMethod::Forward => "forward",
            DifferenceMethod::Backward => "backward",
        }
    }

    /// Minimum number of samples the stencil reads.
    #[inline]
    pub const fn min_points(&self) -> usize {
        // Every stencil, including the boundary fallbacks, reads two samples.
        2
    }

    /// Resolve a method name against the differentiation vocabulary.
    ///
    /// Matching is exact and case-sensitive: `"middle"`, `"forward"`,
    /// `"backward"`.
    pub fn from_name(name: &str) -> Result<Self, DiscalcError> {
        match name {
            "middle" => Ok(DifferenceMethod::Middle),
            "forward" => Ok(DifferenceMethod::Forward),
            "backward" => Ok(DifferenceMethod::Backward),
            _ => Err(DiscalcError::UnknownMethod {
                name: name.to_string(),
                family: "differentiation",
            }),
        }
    }
}

// ============================================================================
// Quadrature Method
// ============================================================================

/// Quadrature rule for numerical integration.
///
/// Every rule reduces a sampled function to a single definite-integral
/// estimate over the sampled domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureMethod {
    /// Composite trapezoidal rule. Exact for piecewise-linear data.
    Trapezoid,

    /// Composite Simpson variant: a stride-2 parabolic sweep over interior
    /// pairs plus explicit boundary terms.
    ///
    /// The sweep assumes an even number of intervals (odd sample count).
    /// With an even sample count the final interval receives no parabolic
    /// contribution beyond the boundary terms.
    Simpson,

    /// Midpoint rule with half-weighted boundary corrections.
    Midpoint,
}

impl QuadratureMethod {
    /// Get the wire name of the method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            QuadratureMethod::Trapezoid => "trapez",
            QuadratureMethod::Simpson => "simpson",
            QuadratureMethod::Midpoint => "midpoint",
        }
    }

    /// Minimum number of samples the rule reads.
    #[inline]
    pub const fn min_points(&self) -> usize {
        match self {
            QuadratureMethod::Trapezoid => 2,
            // The parabolic sweep needs at least one full sample pair.
            QuadratureMethod::Simpson => 3,
            QuadratureMethod::Midpoint => 2,
        }
    }

    /// Resolve a method name against the integration vocabulary.
    ///
    /// Matching is exact and case-sensitive: `"trapez"`, `"simpson"`,
    /// `"midpoint"`.
    pub fn from_name(name: &str) -> Result<Self, DiscalcError> {
        match name {
            "trapez" => Ok(QuadratureMethod::Trapezoid),
            "simpson" => Ok(QuadratureMethod::Simpson),
            "midpoint" => Ok(QuadratureMethod::Midpoint),
            _ => Err(DiscalcError::UnknownMethod {
                name: name.to_string(),
                family: "integration",
            }),
        }
    }
}
