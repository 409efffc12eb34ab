//! Tests for reductions.
//!
//! ## Test Organization
//!
//! 1. **Sums and Products** - Identity elements, dot products
//! 2. **Extrema** - Values, indices, ties and NaN handling
//! 3. **Norms** - Each order, overflow safety, invalid orders

use approx::assert_relative_eq;

use floats::prelude::*;

// ============================================================================
// Sum and Product Tests
// ============================================================================

/// Test sum and product, including their identity elements.
#[test]
fn test_sum_prod() {
    let s = vec![1.0, -2.0, 3.0, -4.0, 5.0, 6.0, 7.0];

    assert_relative_eq!(sum(&s), 16.0, epsilon = 1e-12);
    assert_relative_eq!(prod(&s), 5040.0, epsilon = 1e-12);
    assert_eq!(sum(&[]), 0.0);
    assert_eq!(prod(&[]), 1.0);
}

/// Test dot product across the SIMD chunk boundary.
#[test]
fn test_dot() {
    let a: Vec<f64> = (1..=9).map(|i| i as f64).collect();
    let b = vec![1.0; 9];

    assert_relative_eq!(dot(&a, &b).unwrap(), 45.0, epsilon = 1e-12);
    assert_relative_eq!(dot(&a, &a).unwrap(), 285.0, epsilon = 1e-12);
    assert_eq!(dot(&[], &[]).unwrap(), 0.0);
}

/// Test dot product rejects mismatched lengths.
#[test]
fn test_dot_length_mismatch() {
    assert_eq!(
        dot(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]),
        Err(FloatsError::LengthMismatch {
            expected: 3,
            got: 4
        })
    );
}

// ============================================================================
// Extrema Tests
// ============================================================================

/// Test maximum and minimum values and their indices.
#[test]
fn test_extrema() {
    let s = vec![3.0, -1.0, 7.0, 7.0, -1.0, 2.0];

    assert_eq!(max(&s).unwrap(), 7.0);
    assert_eq!(min(&s).unwrap(), -1.0);
    // Ties resolve to the first occurrence.
    assert_eq!(arg_max(&s).unwrap(), 2);
    assert_eq!(arg_min(&s).unwrap(), 1);
}

/// Test that NaN values are skipped by extrema.
#[test]
fn test_extrema_skip_nan() {
    let s = vec![f64::NAN, 2.0, f64::NAN, -3.0, 5.0];

    assert_eq!(arg_max(&s).unwrap(), 4);
    assert_eq!(arg_min(&s).unwrap(), 3);

    let all_nan = vec![f64::NAN, f64::NAN];
    assert_eq!(arg_max(&all_nan).unwrap(), 0);
    assert!(max(&all_nan).unwrap().is_nan());
}

/// Test that extrema of an empty sequence are an error.
#[test]
fn test_extrema_empty() {
    assert_eq!(max(&[]), Err(FloatsError::EmptyInput));
    assert_eq!(min(&[]), Err(FloatsError::EmptyInput));
    assert_eq!(arg_max(&[]), Err(FloatsError::EmptyInput));
    assert_eq!(arg_min(&[]), Err(FloatsError::EmptyInput));
}

// ============================================================================
// Norm Tests
// ============================================================================

/// Test each norm order on a small vector.
#[test]
fn test_norm_orders() {
    let s = vec![3.0, -4.0];

    assert_relative_eq!(norm(&s, Norm::L1).unwrap(), 7.0, epsilon = 1e-12);
    assert_relative_eq!(norm(&s, Norm::L2).unwrap(), 5.0, epsilon = 1e-12);
    assert_relative_eq!(norm(&s, Norm::Inf).unwrap(), 4.0, epsilon = 1e-12);
    assert_relative_eq!(norm(&s, Norm::P(2.0)).unwrap(), 5.0, epsilon = 1e-12);
    assert_relative_eq!(
        norm(&s, Norm::P(3.0)).unwrap(),
        91.0_f64.powf(1.0 / 3.0),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        norm(&s, Norm::P(f64::INFINITY)).unwrap(),
        4.0,
        epsilon = 1e-12
    );
}

/// Test the Euclidean norm does not overflow on large values.
#[test]
fn test_norm_l2_no_overflow() {
    let s = vec![3e200, 4e200];
    assert_relative_eq!(norm(&s, Norm::L2).unwrap(), 5e200, max_relative = 1e-12);

    let tiny = vec![3e-200, 4e-200];
    assert_relative_eq!(norm(&tiny, Norm::L2).unwrap(), 5e-200, max_relative = 1e-12);
}

/// Test norms of empty and special-valued sequences.
#[test]
fn test_norm_special_values() {
    assert_eq!(norm(&[], Norm::L2).unwrap(), 0.0);
    assert_eq!(norm(&[], Norm::Inf).unwrap(), 0.0);
    assert_eq!(norm(&[1.0, f64::INFINITY], Norm::L2).unwrap(), f64::INFINITY);
    assert!(norm(&[1.0, f64::NAN], Norm::L2).unwrap().is_nan());
    assert!(norm(&[1.0, f64::NAN], Norm::Inf).unwrap().is_nan());
}

/// Test that orders below 1 are rejected.
#[test]
fn test_norm_invalid_order() {
    assert_eq!(norm(&[1.0], Norm::P(0.5)), Err(FloatsError::InvalidNorm(0.5)));
    assert!(matches!(
        norm(&[1.0], Norm::P(f64::NAN)),
        Err(FloatsError::InvalidNorm(p)) if p.is_nan()
    ));
}

/// Test distances between two sequences.
#[test]
fn test_distance() {
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![4.0, 6.0, 3.0];

    assert_relative_eq!(distance(&a, &b, Norm::L2).unwrap(), 5.0, epsilon = 1e-12);
    assert_relative_eq!(distance(&a, &b, Norm::L1).unwrap(), 7.0, epsilon = 1e-12);
    assert_relative_eq!(distance(&a, &b, Norm::Inf).unwrap(), 4.0, epsilon = 1e-12);
    assert!(distance(&a, &[1.0], Norm::L2).is_err());
    assert!(distance(&a, &b, Norm::P(0.0)).is_err());
}
