//! Precondition checks shared by every fallible operation.
//!
//! ## Purpose
//!
//! This module centralizes the length, emptiness and parameter checks that
//! operations run before touching their destination.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation.
//! * **Before mutation**: Callers validate everything first, then write.
//!   An operation that fails has not modified any argument.
//!
//! ## Non-goals
//!
//! * This module does not clamp, truncate or pad sequences to make them fit.

// Internal dependencies
use crate::primitives::errors::FloatsError;

// ============================================================================
// Length Guards
// ============================================================================

/// Report whether every sequence shares the same length.
///
/// Zero or one sequence trivially share a length.
///
/// ```
/// use floats::equal_lengths;
///
/// assert!(equal_lengths(&[&[1.0, 2.0], &[3.0, 4.0]]));
/// assert!(!equal_lengths(&[&[1.0, 2.0, 3.0], &[5.0, 6.0, 7.0, 8.0]]));
/// ```
pub fn equal_lengths(seqs: &[&[f64]]) -> bool {
    match seqs.split_first() {
        None => true,
        Some((first, rest)) => rest.iter().all(|s| s.len() == first.len()),
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for slice operations.
///
/// All methods return `Result<(), FloatsError>` and fail on the first
/// violation found.
pub struct Validator;

impl Validator {
    /// Validate that `got` has the same length as `expected`.
    #[inline]
    pub fn validate_equal_lengths(expected: &[f64], got: &[f64]) -> Result<(), FloatsError> {
        if expected.len() != got.len() {
            return Err(FloatsError::LengthMismatch {
                expected: expected.len(),
                got: got.len(),
            });
        }
        Ok(())
    }

    /// Validate a destination against two operands.
    ///
    /// The destination length is the reference; the first operand that
    /// disagrees with it is reported.
    #[inline]
    pub fn validate_binary(dst: &[f64], a: &[f64], b: &[f64]) -> Result<(), FloatsError> {
        Self::validate_equal_lengths(dst, a)?;
        Self::validate_equal_lengths(dst, b)
    }

    /// Validate that a sequence has at least one element.
    #[inline]
    pub fn validate_non_empty(s: &[f64]) -> Result<(), FloatsError> {
        if s.is_empty() {
            return Err(FloatsError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that a destination has at least `min` slots.
    #[inline]
    pub fn validate_min_len(s: &[f64], min: usize) -> Result<(), FloatsError> {
        if s.len() < min {
            return Err(FloatsError::TooFewPoints { got: s.len(), min });
        }
        Ok(())
    }

    /// Validate a p-norm order.
    ///
    /// # Notes
    ///
    /// * Orders below 1 do not define a norm.
    /// * `+inf` is accepted and means the maximum norm.
    pub fn validate_norm_order(p: f64) -> Result<(), FloatsError> {
        if p.is_nan() || p < 1.0 {
            return Err(FloatsError::InvalidNorm(p));
        }
        Ok(())
    }
}
