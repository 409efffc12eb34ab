//! Tests for cumulative sums and products.
//!
//! ## Test Organization
//!
//! 1. **Worked Examples** - Known inputs and outputs
//! 2. **In-place Scans** - Overwriting the source
//! 3. **Edge Cases** - Empty input, length mismatch

use approx::assert_relative_eq;

use floats::prelude::*;

// ============================================================================
// Worked Example Tests
// ============================================================================

/// Test cumulative product.
///
/// Verifies `dst[i] = dst[i-1] * src[i]` and the source is unchanged.
#[test]
fn test_cum_prod() {
    let s = vec![1.0, -2.0, 3.0, -4.0];
    let mut dst = vec![0.0; s.len()];

    cum_prod(&mut dst, &s).unwrap();

    assert_eq!(dst, [1.0, -2.0, -6.0, 24.0]);
    assert_eq!(s, [1.0, -2.0, 3.0, -4.0]);
}

/// Test cumulative sum.
#[test]
fn test_cum_sum() {
    let s = vec![1.0, -2.0, 3.0, -4.0];
    let mut dst = vec![0.0; s.len()];

    cum_sum(&mut dst, &s).unwrap();

    assert_eq!(dst, [1.0, -1.0, 2.0, -2.0]);
    assert_eq!(s, [1.0, -2.0, 3.0, -4.0]);
}

/// Test cumulative sum against the closed-form partial sums.
///
/// For `s[i] = i + 1`, the partial sum is `(i + 1)(i + 2) / 2`.
#[test]
fn test_cum_sum_closed_form() {
    let s: Vec<f64> = (1..=50).map(|i| i as f64).collect();
    let mut dst = vec![0.0; s.len()];

    cum_sum(&mut dst, &s).unwrap();

    for (i, &v) in dst.iter().enumerate() {
        let k = (i + 1) as f64;
        assert_relative_eq!(v, k * (k + 1.0) / 2.0, epsilon = 1e-12);
    }
}

/// Test that re-applying a cumulative sum changes the result.
///
/// Verifies the second pass accumulates the first pass's partial sums.
#[test]
fn test_cum_sum_not_idempotent() {
    let s = vec![1.0, 2.0, 3.0];
    let mut once = vec![0.0; 3];
    let mut twice = vec![0.0; 3];

    cum_sum(&mut once, &s).unwrap();
    cum_sum(&mut twice, &once).unwrap();

    assert_eq!(once, [1.0, 3.0, 6.0]);
    assert_eq!(twice, [1.0, 4.0, 10.0]);
}

// ============================================================================
// In-place Scan Tests
// ============================================================================

/// Test scanning a sequence onto itself.
///
/// Verifies the in-place forms match the two-argument forms.
#[test]
fn test_in_place_matches_out_of_place() {
    let s = vec![1.5, -2.0, 3.0, -4.0, 0.5];
    let mut expected = vec![0.0; s.len()];

    let mut in_place = s.clone();
    cum_sum(&mut expected, &s).unwrap();
    cum_sum_in_place(&mut in_place);
    assert_eq!(in_place, expected);

    let mut in_place = s.clone();
    cum_prod(&mut expected, &s).unwrap();
    cum_prod_in_place(&mut in_place);
    assert_eq!(in_place, expected);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that empty inputs produce empty outputs.
#[test]
fn test_cumulative_empty() {
    let mut dst: Vec<f64> = vec![];

    assert!(cum_sum(&mut dst, &[]).is_ok());
    assert!(cum_prod(&mut dst, &[]).is_ok());
    cum_sum_in_place(&mut dst);
    assert!(dst.is_empty());
}

/// Test that a short destination is rejected before any write.
#[test]
fn test_cumulative_length_mismatch() {
    let mut dst = vec![9.0; 2];

    let res = cum_sum(&mut dst, &[1.0, 2.0, 3.0]);
    assert_eq!(
        res,
        Err(FloatsError::LengthMismatch {
            expected: 2,
            got: 3
        })
    );
    assert!(cum_prod(&mut dst, &[1.0]).is_err());
    assert_eq!(dst, [9.0, 9.0]);
}
