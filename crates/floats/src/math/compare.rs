//! Structural comparison and inspection of sequences.

// External dependencies
use num_traits::Float;

/// Report whether `a` and `b` have the same length and equal elements.
///
/// NaN compares unequal to everything, including itself.
pub fn equal(a: &[f64], b: &[f64]) -> bool {
    a == b
}

/// Report whether `a` and `b` have the same length and every pair of
/// elements is within `tol` of each other, absolutely or relatively.
pub fn equal_approx(a: &[f64], b: &[f64], tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| within_abs_or_rel(x, y, tol))
}

// Infinities only match themselves; the relative test scales by the larger
// magnitude.
#[inline]
fn within_abs_or_rel(x: f64, y: f64, tol: f64) -> bool {
    if x == y {
        return true;
    }
    if x.is_infinite() || y.is_infinite() {
        return false;
    }
    let delta = Float::abs(x - y);
    if delta <= tol {
        return true;
    }
    delta <= tol * Float::max(Float::abs(x), Float::abs(y))
}

/// Report whether any element is NaN.
pub fn has_nan(s: &[f64]) -> bool {
    s.iter().any(|v| v.is_nan())
}

/// Count the elements for which `predicate` returns true.
///
/// `predicate` is called exactly once per element, in index order.
pub fn count<F: FnMut(f64) -> bool>(mut predicate: F, s: &[f64]) -> usize {
    let mut n = 0;
    for &v in s {
        if predicate(v) {
            n += 1;
        }
    }
    n
}
