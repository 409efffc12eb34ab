//! Four-lane SIMD kernels shared by the element-wise and reduction modules.
//!
//! ## Purpose
//!
//! Each kernel walks its slices in chunks of [`LANES`] values through
//! `wide::f64x4`, then finishes the remainder with the scalar form of the
//! same operation.
//!
//! ## Invariants
//!
//! * Callers have already validated that all slices share one length.
//! * For element-wise kernels the lane and scalar closures must compute the
//!   same IEEE operation, so results do not depend on the position of an
//!   element relative to a chunk boundary.

// External dependencies
use wide::f64x4;

/// Number of `f64` values processed per SIMD step.
pub const LANES: usize = 4;

#[inline(always)]
fn load(s: &[f64]) -> f64x4 {
    f64x4::new([s[0], s[1], s[2], s[3]])
}

#[inline(always)]
fn store(dst: &mut [f64], v: f64x4) {
    dst.copy_from_slice(&v.to_array());
}

// ============================================================================
// Element-wise Kernels
// ============================================================================

/// `dst[i] = op(dst[i])`.
#[inline]
pub fn map_assign<V, S>(dst: &mut [f64], lanes: V, scalar: S)
where
    V: Fn(f64x4) -> f64x4,
    S: Fn(f64) -> f64,
{
    let mut chunks = dst.chunks_exact_mut(LANES);
    for d in &mut chunks {
        let out = lanes(load(d));
        store(d, out);
    }
    for d in chunks.into_remainder() {
        *d = scalar(*d);
    }
}

/// `dst[i] = op(src[i])`.
#[inline]
pub fn map_to<V, S>(dst: &mut [f64], src: &[f64], lanes: V, scalar: S)
where
    V: Fn(f64x4) -> f64x4,
    S: Fn(f64) -> f64,
{
    debug_assert_eq!(dst.len(), src.len());
    let mut d_chunks = dst.chunks_exact_mut(LANES);
    let mut s_chunks = src.chunks_exact(LANES);
    for (d, s) in (&mut d_chunks).zip(&mut s_chunks) {
        store(d, lanes(load(s)));
    }
    for (d, &s) in d_chunks.into_remainder().iter_mut().zip(s_chunks.remainder()) {
        *d = scalar(s);
    }
}

/// `dst[i] = op(dst[i], src[i])`.
#[inline]
pub fn zip_assign<V, S>(dst: &mut [f64], src: &[f64], lanes: V, scalar: S)
where
    V: Fn(f64x4, f64x4) -> f64x4,
    S: Fn(f64, f64) -> f64,
{
    debug_assert_eq!(dst.len(), src.len());
    let mut d_chunks = dst.chunks_exact_mut(LANES);
    let mut s_chunks = src.chunks_exact(LANES);
    for (d, s) in (&mut d_chunks).zip(&mut s_chunks) {
        let out = lanes(load(d), load(s));
        store(d, out);
    }
    for (d, &s) in d_chunks.into_remainder().iter_mut().zip(s_chunks.remainder()) {
        *d = scalar(*d, s);
    }
}

/// `dst[i] = op(a[i], b[i])`.
#[inline]
pub fn zip_to<V, S>(dst: &mut [f64], a: &[f64], b: &[f64], lanes: V, scalar: S)
where
    V: Fn(f64x4, f64x4) -> f64x4,
    S: Fn(f64, f64) -> f64,
{
    debug_assert!(dst.len() == a.len() && a.len() == b.len());
    let mut d_chunks = dst.chunks_exact_mut(LANES);
    let mut a_chunks = a.chunks_exact(LANES);
    let mut b_chunks = b.chunks_exact(LANES);
    for ((d, x), y) in (&mut d_chunks).zip(&mut a_chunks).zip(&mut b_chunks) {
        store(d, lanes(load(x), load(y)));
    }
    let tail = d_chunks.into_remainder();
    for ((d, &x), &y) in tail
        .iter_mut()
        .zip(a_chunks.remainder())
        .zip(b_chunks.remainder())
    {
        *d = scalar(x, y);
    }
}

// ============================================================================
// Reduction Kernels
// ============================================================================

/// Sum of all values, accumulated per lane.
#[inline]
pub fn sum(s: &[f64]) -> f64 {
    let mut acc = f64x4::splat(0.0);
    let mut chunks = s.chunks_exact(LANES);
    for c in &mut chunks {
        acc += load(c);
    }
    let mut total = acc.reduce_add();
    for &v in chunks.remainder() {
        total += v;
    }
    total
}

/// Sum of pairwise products, accumulated per lane.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut acc = f64x4::splat(0.0);
    let mut a_chunks = a.chunks_exact(LANES);
    let mut b_chunks = b.chunks_exact(LANES);
    for (x, y) in (&mut a_chunks).zip(&mut b_chunks) {
        acc += load(x) * load(y);
    }
    let mut total = acc.reduce_add();
    for (&x, &y) in a_chunks.remainder().iter().zip(b_chunks.remainder()) {
        total += x * y;
    }
    total
}
