//! Predicate-based selection.
//!
//! ## Purpose
//!
//! Produce a new sequence holding, in their original order, the elements of
//! a source sequence accepted by a caller-supplied predicate.
//!
//! ## Design notes
//!
//! * **Stateful predicates**: The predicate is `FnMut`, so it may carry state
//!   from one call to the next (a running maximum, a counter, ...). It is
//!   borrowed for the duration of the call only.
//! * **Capacity hint**: `None` lets the output grow on demand. A hint larger
//!   than the source is clamped, since the output can never be longer.
//!
//! ## Invariants
//!
//! * The predicate is evaluated exactly once per element, left to right,
//!   and never after the last element.
//! * The source is never modified.
//! * The number of accepted elements is the length of the returned vector.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Keep the elements of `src` for which `predicate` returns true.
///
/// ```
/// use floats::filter;
///
/// let s = [1.0, 3.0, 2.0, 6.0, 5.0];
///
/// // Keep a strictly increasing subsequence.
/// let mut running_max = f64::NEG_INFINITY;
/// let dst = filter(
///     |v| {
///         if v > running_max {
///             running_max = v;
///             return true;
///         }
///         false
///     },
///     &s,
///     None,
/// );
///
/// assert_eq!(dst, [1.0, 3.0, 6.0]);
/// ```
pub fn filter<F>(mut predicate: F, src: &[f64], capacity_hint: Option<usize>) -> Vec<f64>
where
    F: FnMut(f64) -> bool,
{
    let mut dst = match capacity_hint {
        Some(n) => Vec::with_capacity(n.min(src.len())),
        None => Vec::new(),
    };

    for &v in src {
        if predicate(v) {
            dst.push(v);
        }
    }

    dst
}
