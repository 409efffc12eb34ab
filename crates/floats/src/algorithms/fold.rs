//! Left and right folds with a caller-supplied combining function.
//!
//! ## Key concepts
//!
//! * **Left fold**: `combine(...combine(combine(initial, s[0]), s[1])..., s[n-1])`.
//!   The accumulator is the first argument.
//! * **Right fold**: `combine(s[0], combine(s[1], ... combine(s[n-1], initial)))`.
//!   Elements are visited from the last to the first and the accumulator is
//!   the second argument.
//!
//! ## Invariants
//!
//! * Folding the empty sequence returns `initial` without calling `combine`.
//! * `combine` is called exactly once per element.
//! * The source is never modified.

/// Reduce `src` from the left, starting from `initial`.
///
/// ```
/// use floats::fold_left;
///
/// let s = [9.0, -2.0, 21.0, 4.0];
/// let val = fold_left(|a, b| if a < b { a * b } else { a - b }, &s, 5.0);
/// assert_eq!(val, 22.0);
/// ```
pub fn fold_left<F>(mut combine: F, src: &[f64], initial: f64) -> f64
where
    F: FnMut(f64, f64) -> f64,
{
    src.iter().fold(initial, |acc, &v| combine(acc, v))
}

/// Reduce `src` from the right, starting from `initial`.
///
/// ```
/// use floats::fold_right;
///
/// let s = [9.0, -2.0, 21.0, 4.0];
/// let val = fold_right(|a, b| if a < b { a * b } else { a - b }, &s, 5.0);
/// assert_eq!(val, 11.0);
/// ```
pub fn fold_right<F>(mut combine: F, src: &[f64], initial: f64) -> f64
where
    F: FnMut(f64, f64) -> f64,
{
    src.iter().rev().fold(initial, |acc, &v| combine(v, acc))
}
