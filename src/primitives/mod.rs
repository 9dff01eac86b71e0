//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational types shared by every other layer:
//! - Error types for all fallible operations
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for discrete-calculus operations.
pub mod errors;
