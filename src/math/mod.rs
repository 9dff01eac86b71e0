//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the mathematical vocabulary and sequence utilities
//! used throughout the crate:
//! - Closed method identifiers for differentiation and integration
//! - Linearly spaced sequence construction
//! - Cumulative reductions (sum, product)
//!
//! These are reusable building blocks with no formula-sweep logic.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Method identifiers and string resolution.
pub mod method;

/// Linearly spaced sequences and cumulative reductions.
pub mod sequence;
