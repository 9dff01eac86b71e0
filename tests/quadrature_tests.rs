#![cfg(feature = "dev")]
//! Tests for the composite quadrature sweeps.
//!
//! These tests verify the integration kernels for:
//! - Trapezoid exactness on linear data
//! - The Simpson variant's interior sweep and boundary terms, including its
//!   parity behavior on even sample counts
//! - Midpoint boundary-weight asymmetry between the two grid forms
//! - Minimum-length inputs
//!
//! ## Test Organization
//!
//! 1. **Trapezoid Rule** - Exactness, both forms
//! 2. **Simpson Variant** - Odd counts, even-count parity, distinct forms
//! 3. **Midpoint Rule** - Interior weights, boundary asymmetry
//! 4. **Minimum Lengths** - Two- and three-sample sequences

use approx::assert_relative_eq;

use discalc::internals::algorithms::integration::{quadrature_on_grid, quadrature_uniform};
use discalc::internals::math::method::QuadratureMethod::{Midpoint, Simpson, Trapezoid};

// ============================================================================
// Trapezoid Rule Tests
// ============================================================================

/// Test trapezoid exactness for linear data.
///
/// Verifies the rule reproduces the analytic integral of f(x) = x.
#[test]
fn test_trapezoid_exact_linear() {
    let delta = 0.5;
    let y: Vec<f64> = (0..9).map(|i| i as f64 * delta).collect();

    // f(x) = x on [0, 4]: analytic integral is 8.
    let area = quadrature_uniform(&y, delta, Trapezoid);
    assert_relative_eq!(area, 8.0, epsilon = 1e-12);
}

/// Test trapezoid over a non-uniform coordinate sequence.
#[test]
fn test_trapezoid_on_grid() {
    let x = vec![0.0, 1.0, 3.0];
    let y = vec![0.0, 2.0, 6.0];

    // f(x) = 2x: 0.5*(2+0)*1 + 0.5*(6+2)*2 = 9.
    let area = quadrature_on_grid(&y, &x, Trapezoid);
    assert_relative_eq!(area, 9.0, epsilon = 1e-12);
}

/// Test that both trapezoid forms agree on a uniform coordinate sequence.
#[test]
fn test_trapezoid_form_agreement() {
    let x: Vec<f64> = (0..11).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| v * v).collect();

    let by_delta = quadrature_uniform(&y, 1.0, Trapezoid);
    let by_grid = quadrature_on_grid(&y, &x, Trapezoid);
    assert_relative_eq!(by_delta, by_grid, epsilon = 1e-12);
}

// ============================================================================
// Simpson Variant Tests
// ============================================================================

/// Test the uniform Simpson accumulation on an odd sample count.
///
/// Verifies the stride-2 sweep and the (delta/3)*(f[0] + f[n-1]) boundary
/// term against a hand-accumulated expectation.
#[test]
fn test_simpson_uniform_odd_count() {
    let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];

    let area = quadrature_uniform(&y, 1.0, Simpson);

    // Sweep: (1/3)*(4*1 + 2*4) + (1/3)*(4*9 + 2*16); boundary: (1/3)*(0 + 16).
    let expected = (1.0 / 3.0) * 12.0 + (1.0 / 3.0) * 68.0 + (1.0 / 3.0) * 16.0;
    assert_relative_eq!(area, expected, epsilon = 1e-12);
}

/// Test the non-uniform Simpson accumulation on an odd sample count.
///
/// Verifies the per-pair spacing factor and the sixth-weighted boundary
/// terms.
#[test]
fn test_simpson_on_grid_odd_count() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];

    let area = quadrature_on_grid(&y, &x, Simpson);

    // Sweep: ((2-1)/3)*(4*1 + 2*4) + ((4-3)/3)*(4*9 + 2*16);
    // boundary: ((1-0)/6)*0 + ((4-3)/6)*16.
    let expected = (1.0 / 3.0) * 12.0 + (1.0 / 3.0) * 68.0 + 16.0 / 6.0;
    assert_relative_eq!(area, expected, epsilon = 1e-12);
}

/// Test that the two Simpson forms differ by their boundary-term shape.
///
/// Verifies on identical evenly spaced data that the uniform form's
/// (delta/3) end weighting and the grid form's (spacing/6) end weighting
/// are preserved as distinct, not unified.
#[test]
fn test_simpson_forms_are_distinct() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];

    let uniform = quadrature_uniform(&y, 1.0, Simpson);
    let on_grid = quadrature_on_grid(&y, &x, Simpson);

    // Same interior sweep; the boundary terms differ by (1/3 - 1/6)*(f0 + fn).
    assert_relative_eq!(uniform - on_grid, 16.0 / 6.0, epsilon = 1e-12);
}

/// Test Simpson parity behavior on an even sample count.
///
/// Verifies that the stride-2 sweep stops before the final interval, which
/// receives no parabolic contribution beyond the boundary terms.
#[test]
fn test_simpson_even_count_drops_last_interval() {
    let y = vec![0.0, 1.0, 4.0, 9.0];

    let area = quadrature_uniform(&y, 1.0, Simpson);

    // Sweep covers only the pair at i = 0: (1/3)*(4*1 + 2*4) = 4;
    // boundary: (1/3)*(0 + 9) = 3.
    assert_relative_eq!(area, 7.0, epsilon = 1e-12);
}

/// Test Simpson convergence on a densely sampled parabola.
///
/// Verifies the 1000-point x^2 integration lands within 1e-2 relative of
/// the analytic value despite the variant's boundary-term bias.
#[test]
fn test_simpson_dense_parabola() {
    let delta = 0.01;
    let y: Vec<f64> = (0..1000).map(|i| (i as f64 * delta).powi(2)).collect();

    let area = quadrature_uniform(&y, delta, Simpson);
    assert_relative_eq!(area, 1000.0 / 3.0, max_relative = 1e-2);
}

// ============================================================================
// Midpoint Rule Tests
// ============================================================================

/// Test the uniform midpoint accumulation.
///
/// Verifies full-weight interior samples and half-weight boundary samples.
#[test]
fn test_midpoint_uniform() {
    let y = vec![1.0, 2.0, 3.0, 4.0];

    let area = quadrature_uniform(&y, 1.0, Midpoint);

    // Interior: 2 + 3; boundary: 0.5*1 + 0.5*4.
    assert_relative_eq!(area, 7.5, epsilon = 1e-12);
}

/// Test the non-uniform midpoint accumulation.
///
/// Verifies half-weighted straddling intervals inside and quarter-weighted
/// boundary terms, which intentionally do NOT match the uniform form's
/// half-weight on identical spacing.
#[test]
fn test_midpoint_on_grid_quarter_weights() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![1.0, 2.0, 3.0, 4.0];

    let area = quadrature_on_grid(&y, &x, Midpoint);

    // Interior: 0.5*2*(2-0) + 0.5*3*(3-1) = 5; boundary: 0.25*1 + 0.25*4.
    assert_relative_eq!(area, 6.25, epsilon = 1e-12);

    // The asymmetry against the uniform form is preserved.
    let uniform = quadrature_uniform(&y, 1.0, Midpoint);
    assert_relative_eq!(uniform - area, 1.25, epsilon = 1e-12);
}

/// Test midpoint over genuinely non-uniform spacing.
#[test]
fn test_midpoint_nonuniform_spacing() {
    let x = vec![0.0, 2.0, 3.0, 7.0];
    let y = vec![1.0, 5.0, 2.0, 4.0];

    let area = quadrature_on_grid(&y, &x, Midpoint);

    // Interior: 0.5*5*(3-0) + 0.5*2*(7-2) = 7.5 + 5;
    // boundary: 0.25*1*(2-0) + 0.25*4*(7-3) = 0.5 + 4.
    assert_relative_eq!(area, 17.0, epsilon = 1e-12);
}

// ============================================================================
// Minimum Length Tests
// ============================================================================

/// Test two-sample sequences under trapezoid and midpoint.
///
/// Verifies both rules reduce to boundary-only accumulation without
/// out-of-bounds access.
#[test]
fn test_two_samples() {
    let x = vec![0.0, 2.0];
    let y = vec![3.0, 5.0];

    // Trapezoid: 0.5*(5+3)*2 = 8.
    assert_relative_eq!(quadrature_on_grid(&y, &x, Trapezoid), 8.0, epsilon = 1e-12);
    assert_relative_eq!(quadrature_uniform(&y, 2.0, Trapezoid), 8.0, epsilon = 1e-12);

    // Midpoint grid form: 0.25*3*2 + 0.25*5*2 = 4.
    assert_relative_eq!(quadrature_on_grid(&y, &x, Midpoint), 4.0, epsilon = 1e-12);

    // Midpoint uniform form: 0.5*3*2 + 0.5*5*2 = 8.
    assert_relative_eq!(quadrature_uniform(&y, 2.0, Midpoint), 8.0, epsilon = 1e-12);
}

/// Test the three-sample Simpson minimum.
///
/// Verifies a single interior pair plus boundary terms.
#[test]
fn test_simpson_three_samples() {
    let x = vec![0.0, 1.0, 2.0];
    let y = vec![0.0, 1.0, 4.0];

    let area = quadrature_on_grid(&y, &x, Simpson);

    // Sweep: ((2-1)/3)*(4*1 + 2*4) = 4; boundary: (1/6)*0 + (1/6)*4.
    assert_relative_eq!(area, 4.0 + 4.0 / 6.0, epsilon = 1e-12);
}
