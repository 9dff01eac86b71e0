//! # discalc — discrete calculus over sampled data
//!
//! Numerical differentiation, numerical integration, and sample-grid
//! utilities for data given as ordered sequences of function values. All
//! operations work on either a **uniform grid** (a single step size `delta`)
//! or a **non-uniform grid** (an explicit coordinate sequence), and every
//! formula is generic over the floating-point type.
//!
//! ## What it provides
//!
//! - **Sequence construction**: evenly spaced sample sequences ([`prelude::linspace`]).
//! - **Differentiation**: central, forward, and backward finite-difference
//!   stencils with one-sided boundary fallbacks.
//! - **Integration**: composite trapezoid, Simpson, and midpoint quadrature.
//! - **Cumulative reduction**: total sum and total product of a sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use discalc::prelude::*;
//!
//! // Sample f(x) = x^2 on [0, 10) with 1000 points.
//! let x: Vec<f64> = linspace(0.0, 10.0, 1000);
//! let y: Vec<f64> = x.iter().map(|&v| v * v).collect();
//!
//! // Definite integral via composite Simpson quadrature.
//! let area = integrate(&y, &x, "simpson")?;
//! let exact = 1000.0 / 3.0;
//! assert!((area - exact).abs() / exact < 1e-2);
//! # Result::<(), DiscalcError>::Ok(())
//! ```
//!
//! Methods can also be selected with the closed enums directly, skipping the
//! string vocabulary:
//!
//! ```rust
//! use discalc::prelude::*;
//!
//! let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];
//!
//! // d/dx of f(x) = x^2 sampled at unit spacing.
//! let slope = differentiate_uniform_with(&y, 1.0, Middle)?;
//! assert_eq!(slope.len(), y.len());
//!
//! // Interior points use the symmetric stencil: slope[2] = (9 - 1) / 2.
//! assert_eq!(slope[2], 4.0);
//! # Result::<(), DiscalcError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, DiscalcError>`. Dimension
//! mismatches, unknown method names, and undersized inputs are rejected
//! before any formula executes; there are no partial results.
//!
//! ```rust
//! use discalc::prelude::*;
//!
//! let y = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//!
//! match integrate(&y, &x, "trapez") {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert!(matches!(e, DiscalcError::MismatchedInputs { .. })),
//! }
//! ```
//!
//! ## Method vocabulary
//!
//! String selection is exact and case-sensitive:
//!
//! | Operation       | Names                                  |
//! |-----------------|----------------------------------------|
//! | Differentiation | `"middle"`, `"forward"`, `"backward"`  |
//! | Integration     | `"trapez"`, `"simpson"`, `"midpoint"`  |
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! discalc = { version = "0.1", default-features = false }
//! ```
//!
//! All operations allocate only their output sequence (or nothing, for
//! scalar results), so the crate is suitable for resource-constrained
//! targets; use `f32` to halve the memory footprint.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Math - method identifiers and sequence utilities.
mod math;

// Layer 3: Algorithms - stencil and quadrature sweeps.
mod algorithms;

// Layer 4: Engine - input validation.
mod engine;

// High-level call surface.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        cumulative_product, cumulative_sum, differentiate, differentiate_uniform,
        differentiate_uniform_with, differentiate_with, integrate, integrate_uniform,
        integrate_uniform_with, integrate_with, linspace, DifferenceMethod,
        DifferenceMethod::{Backward, Forward, Middle},
        DiscalcError, QuadratureMethod,
        QuadratureMethod::{Midpoint, Simpson, Trapezoid},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
