//! Element-wise arithmetic over equal-length sequences.
//!
//! ## Purpose
//!
//! This module provides the in-place (`op(dst, src)`) and out-of-place
//! (`op_to(dst, a, b)`) forms of addition, subtraction, multiplication,
//! division and scaling.
//!
//! ## Design notes
//!
//! * **In-place form**: `dst` doubles as the left operand. This is the
//!   idiomatic way to accumulate several sequences into one.
//! * **Out-of-place form**: `a` and `b` are borrowed immutably and are never
//!   modified; the borrow checker rules out `dst` aliasing either of them.
//! * **SIMD**: Loops run four lanes at a time (see `lanes`); results are
//!   identical to the scalar definition.
//!
//! ## Invariants
//!
//! * Multi-sequence operations require equal lengths and fail with
//!   `LengthMismatch` before writing anything.
//! * Division follows IEEE semantics; a zero divisor is not an error.
//!
//! ## Non-goals
//!
//! * Truncating to the shorter input or broadcasting shapes.

// External dependencies
use wide::f64x4;

// Internal dependencies
use crate::math::lanes::{map_assign, map_to, zip_assign, zip_to};
use crate::primitives::errors::FloatsError;
use crate::primitives::validator::Validator;

// ============================================================================
// Addition
// ============================================================================

/// Add `src` to `dst` element-wise, storing the result in `dst`.
///
/// ```
/// use floats::add;
///
/// let mut s1 = vec![1.0, 2.0, 3.0, 4.0];
/// add(&mut s1, &[5.0, 6.0, 7.0, 8.0])?;
/// add(&mut s1, &[1.0, 1.0, 1.0, 1.0])?;
/// assert_eq!(s1, [7.0, 9.0, 11.0, 13.0]);
/// # Ok::<(), floats::FloatsError>(())
/// ```
pub fn add(dst: &mut [f64], src: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_equal_lengths(dst, src)?;
    zip_assign(dst, src, |d, s| d + s, |d, s| d + s);
    Ok(())
}

/// Store `a[i] + b[i]` in `dst[i]`, leaving `a` and `b` untouched.
pub fn add_to(dst: &mut [f64], a: &[f64], b: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_binary(dst, a, b)?;
    zip_to(dst, a, b, |x, y| x + y, |x, y| x + y);
    Ok(())
}

/// Add the constant `c` to every element of `s`.
pub fn add_const(c: f64, s: &mut [f64]) {
    let cv = f64x4::splat(c);
    map_assign(s, |v| v + cv, |v| v + c);
}

/// Add `alpha * src` to `dst` element-wise.
pub fn add_scaled(dst: &mut [f64], alpha: f64, src: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_equal_lengths(dst, src)?;
    let av = f64x4::splat(alpha);
    zip_assign(dst, src, |d, s| d + av * s, |d, s| d + alpha * s);
    Ok(())
}

/// Store `y[i] + alpha * s[i]` in `dst[i]`.
pub fn add_scaled_to(dst: &mut [f64], y: &[f64], alpha: f64, s: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_binary(dst, y, s)?;
    let av = f64x4::splat(alpha);
    zip_to(dst, y, s, |yv, sv| yv + av * sv, |yv, sv| yv + alpha * sv);
    Ok(())
}

// ============================================================================
// Subtraction
// ============================================================================

/// Subtract `src` from `dst` element-wise.
pub fn sub(dst: &mut [f64], src: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_equal_lengths(dst, src)?;
    zip_assign(dst, src, |d, s| d - s, |d, s| d - s);
    Ok(())
}

/// Store `a[i] - b[i]` in `dst[i]`.
pub fn sub_to(dst: &mut [f64], a: &[f64], b: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_binary(dst, a, b)?;
    zip_to(dst, a, b, |x, y| x - y, |x, y| x - y);
    Ok(())
}

// ============================================================================
// Multiplication and Division
// ============================================================================

/// Multiply `dst` by `src` element-wise.
pub fn mul(dst: &mut [f64], src: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_equal_lengths(dst, src)?;
    zip_assign(dst, src, |d, s| d * s, |d, s| d * s);
    Ok(())
}

/// Store `a[i] * b[i]` in `dst[i]`.
pub fn mul_to(dst: &mut [f64], a: &[f64], b: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_binary(dst, a, b)?;
    zip_to(dst, a, b, |x, y| x * y, |x, y| x * y);
    Ok(())
}

/// Divide `dst` by `src` element-wise.
pub fn div(dst: &mut [f64], src: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_equal_lengths(dst, src)?;
    zip_assign(dst, src, |d, s| d / s, |d, s| d / s);
    Ok(())
}

/// Store `a[i] / b[i]` in `dst[i]`.
pub fn div_to(dst: &mut [f64], a: &[f64], b: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_binary(dst, a, b)?;
    zip_to(dst, a, b, |x, y| x / y, |x, y| x / y);
    Ok(())
}

// ============================================================================
// Scaling
// ============================================================================

/// Multiply every element of `s` by `c`.
pub fn scale(c: f64, s: &mut [f64]) {
    let cv = f64x4::splat(c);
    map_assign(s, |v| cv * v, |v| c * v);
}

/// Store `c * s[i]` in `dst[i]`.
pub fn scale_to(dst: &mut [f64], c: f64, s: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_equal_lengths(dst, s)?;
    let cv = f64x4::splat(c);
    map_to(dst, s, |v| cv * v, |v| c * v);
    Ok(())
}
