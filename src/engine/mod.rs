//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer enforces the crate's input contracts before any formula
//! executes:
//! - Dimension agreement between value and coordinate sequences
//! - Per-formula minimum sample counts
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast input validation.
pub mod validator;
