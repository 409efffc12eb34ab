//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports every operation and type
//! needed for a complete workflow with a single import.

use floats::prelude::*;

/// Test a full workflow using only prelude imports.
#[test]
fn test_prelude_workflow() {
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![4.0, 3.0, 2.0, 1.0];
    let mut dst = vec![0.0; 4];

    assert!(equal_lengths(&[&a, &b, &dst]));
    add_to(&mut dst, &a, &b).unwrap();
    assert!(equal(&dst, &[5.0; 4]));

    cum_sum_in_place(&mut dst);
    assert_eq!(dst, [5.0, 10.0, 15.0, 20.0]);

    let big = filter(|v| v > 10.0, &dst, None);
    assert_eq!(big.len(), count(|v| v > 10.0, &dst));

    let total = fold_left(|acc, v| acc + v, &big, 0.0);
    assert_eq!(total, sum(&big));
    assert_eq!(max(&dst).unwrap(), 20.0);
    assert_eq!(norm(&[3.0, 4.0], Norm::default()).unwrap(), 5.0);
}

/// Test that the error type is reachable from the prelude.
#[test]
fn test_prelude_error_type() {
    let res: Result<(), FloatsError> = add(&mut [0.0], &[]);
    assert!(matches!(res, Err(FloatsError::LengthMismatch { .. })));
}
