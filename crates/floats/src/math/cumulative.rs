//! Cumulative sums and products.
//!
//! ## Purpose
//!
//! Prefix scans over a sequence: `dst[0] = src[0]` and, for `i > 0`,
//! `dst[i] = dst[i - 1] ∘ src[i]`.
//!
//! ## Design notes
//!
//! * **Aliasing**: Each output depends only on the previous output and the
//!   current input, so the scan can overwrite its own source. Because `&mut`
//!   and `&` borrows cannot overlap, that case has its own `*_in_place`
//!   entry point.
//!
//! ## Invariants
//!
//! * The empty sequence scans to the empty sequence.
//! * `src` is never modified by the two-argument forms.

// Internal dependencies
use crate::primitives::errors::FloatsError;
use crate::primitives::validator::Validator;

/// Write the running sum of `src` into `dst`.
///
/// ```
/// use floats::cum_sum;
///
/// let s = [1.0, -2.0, 3.0, -4.0];
/// let mut dst = [0.0; 4];
/// cum_sum(&mut dst, &s)?;
/// assert_eq!(dst, [1.0, -1.0, 2.0, -2.0]);
/// # Ok::<(), floats::FloatsError>(())
/// ```
pub fn cum_sum(dst: &mut [f64], src: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_equal_lengths(dst, src)?;
    scan_into(dst, src, |acc, v| acc + v);
    Ok(())
}

/// Write the running product of `src` into `dst`.
pub fn cum_prod(dst: &mut [f64], src: &[f64]) -> Result<(), FloatsError> {
    Validator::validate_equal_lengths(dst, src)?;
    scan_into(dst, src, |acc, v| acc * v);
    Ok(())
}

/// Replace `s` by its running sum.
pub fn cum_sum_in_place(s: &mut [f64]) {
    scan_in_place(s, |acc, v| acc + v);
}

/// Replace `s` by its running product.
pub fn cum_prod_in_place(s: &mut [f64]) {
    scan_in_place(s, |acc, v| acc * v);
}

#[inline]
fn scan_into<F: Fn(f64, f64) -> f64>(dst: &mut [f64], src: &[f64], op: F) {
    let mut acc = match src.first() {
        Some(&first) => first,
        None => return,
    };
    dst[0] = acc;
    for (d, &v) in dst[1..].iter_mut().zip(&src[1..]) {
        acc = op(acc, v);
        *d = acc;
    }
}

#[inline]
fn scan_in_place<F: Fn(f64, f64) -> f64>(s: &mut [f64], op: F) {
    for i in 1..s.len() {
        s[i] = op(s[i - 1], s[i]);
    }
}
