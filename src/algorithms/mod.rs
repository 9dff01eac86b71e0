//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the numerical sweeps:
//! - Finite-difference stencils for differentiation
//! - Composite quadrature rules for integration
//!
//! Each sweep exists in two distinct forms: one over an explicit coordinate
//! sequence (non-uniform grid) and one over a fixed step size (uniform
//! grid). The forms are not algebraic rearrangements of each other; each
//! keeps its own boundary terms.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Finite-difference stencil sweeps.
pub mod differentiation;

/// Composite quadrature sweeps.
pub mod integration;
