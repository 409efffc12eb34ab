//! Sequence generators and reordering.

// Internal dependencies
use crate::primitives::errors::FloatsError;
use crate::primitives::validator::Validator;

/// Fill `dst` with evenly spaced values from `lo` to `hi` inclusive.
///
/// The endpoints are written exactly; interior points are `lo + i * step`.
pub fn span(dst: &mut [f64], lo: f64, hi: f64) -> Result<(), FloatsError> {
    Validator::validate_min_len(dst, 2)?;

    let last = dst.len() - 1;
    let step = (hi - lo) / last as f64;
    for (i, d) in dst.iter_mut().enumerate() {
        *d = lo + step * i as f64;
    }
    dst[0] = lo;
    dst[last] = hi;
    Ok(())
}

/// Reverse the order of the elements of `s` in place.
#[inline]
pub fn reverse(s: &mut [f64]) {
    s.reverse();
}
