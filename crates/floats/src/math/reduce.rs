//! Reductions from a sequence to a scalar.
//!
//! ## Purpose
//!
//! Sums, products, dot products, extrema and norms.
//!
//! ## Design notes
//!
//! * **Identity elements**: `sum` and `prod` of the empty sequence are 0 and
//!   1. Extrema have no identity and report `EmptyInput` instead.
//! * **NaN in extrema**: NaN values are skipped; only an all-NaN sequence
//!   yields NaN (at index 0).
//! * **Overflow-safe L2**: The Euclidean norm is accumulated as
//!   `scale * sqrt(ssq)` so that large or tiny values neither overflow nor
//!   underflow.
//! * **No-std**: `sqrt`, `abs` and `powf` go through `num_traits::Float`,
//!   which is backed by `libm` without `std`.
//!
//! ## Invariants
//!
//! * Ties in `arg_max`/`arg_min` resolve to the lowest index.
//! * The norm of the empty sequence is 0 for every order.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::lanes;
use crate::primitives::errors::FloatsError;
use crate::primitives::validator::Validator;

// ============================================================================
// Sums and Products
// ============================================================================

/// Sum of all elements; 0 for the empty sequence.
pub fn sum(s: &[f64]) -> f64 {
    lanes::sum(s)
}

/// Product of all elements; 1 for the empty sequence.
pub fn prod(s: &[f64]) -> f64 {
    s.iter().product()
}

/// Dot product `Σ a[i] * b[i]`.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, FloatsError> {
    Validator::validate_equal_lengths(a, b)?;
    Ok(lanes::dot(a, b))
}

// ============================================================================
// Extrema
// ============================================================================

/// Index of the first maximal element.
pub fn arg_max(s: &[f64]) -> Result<usize, FloatsError> {
    arg_extreme(s, |v, best| v > best)
}

/// Index of the first minimal element.
pub fn arg_min(s: &[f64]) -> Result<usize, FloatsError> {
    arg_extreme(s, |v, best| v < best)
}

/// Largest element of `s`.
pub fn max(s: &[f64]) -> Result<f64, FloatsError> {
    arg_max(s).map(|i| s[i])
}

/// Smallest element of `s`.
pub fn min(s: &[f64]) -> Result<f64, FloatsError> {
    arg_min(s).map(|i| s[i])
}

fn arg_extreme<F: Fn(f64, f64) -> bool>(s: &[f64], better: F) -> Result<usize, FloatsError> {
    Validator::validate_non_empty(s)?;

    // Seed with the first non-NaN value; an all-NaN sequence reports index 0.
    let Some(start) = s.iter().position(|v| !v.is_nan()) else {
        return Ok(0);
    };

    let mut best = start;
    for (i, &v) in s.iter().enumerate().skip(start + 1) {
        if better(v, s[best]) {
            best = i;
        }
    }
    Ok(best)
}

// ============================================================================
// Norms
// ============================================================================

/// Order of a vector norm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Norm {
    /// Sum of absolute values.
    L1,

    /// Euclidean norm.
    #[default]
    L2,

    /// Maximum absolute value.
    Inf,

    /// General p-norm `(Σ|x|^p)^(1/p)`, `p >= 1`.
    P(f64),
}

impl Norm {
    // Map `P(p)` onto the dedicated orders where one exists, rejecting invalid p.
    fn resolve(self) -> Result<Self, FloatsError> {
        match self {
            Self::P(p) => {
                Validator::validate_norm_order(p)?;
                Ok(if p == 1.0 {
                    Self::L1
                } else if p == 2.0 {
                    Self::L2
                } else if p.is_infinite() {
                    Self::Inf
                } else {
                    self
                })
            }
            other => Ok(other),
        }
    }

    // Evaluate the norm over a stream of values.
    fn eval<I: Iterator<Item = f64>>(self, values: I) -> f64 {
        match self {
            Self::L1 => values.map(<f64 as Float>::abs).sum(),
            Self::L2 => euclidean(values),
            Self::Inf => {
                let mut best = 0.0_f64;
                for v in values {
                    if v.is_nan() {
                        return f64::NAN;
                    }
                    best = Float::max(best, Float::abs(v));
                }
                best
            }
            Self::P(p) => {
                let total: f64 = values.map(|v| Float::powf(Float::abs(v), p)).sum();
                Float::powf(total, 1.0 / p)
            }
        }
    }
}

fn euclidean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let mut scale = 0.0_f64;
    let mut ssq = 1.0_f64;
    for v in values {
        if v == 0.0 {
            continue;
        }
        let a = Float::abs(v);
        if a.is_nan() {
            return f64::NAN;
        }
        if scale < a {
            let r = scale / a;
            ssq = 1.0 + ssq * r * r;
            scale = a;
        } else {
            let r = a / scale;
            ssq += r * r;
        }
    }
    if scale.is_infinite() {
        return f64::INFINITY;
    }
    scale * Float::sqrt(ssq)
}

/// Norm of `s` of the given order.
///
/// ```
/// use floats::{norm, Norm};
///
/// assert_eq!(norm(&[3.0, -4.0], Norm::L2)?, 5.0);
/// assert_eq!(norm(&[3.0, -4.0], Norm::L1)?, 7.0);
/// assert_eq!(norm(&[3.0, -4.0], Norm::Inf)?, 4.0);
/// # Ok::<(), floats::FloatsError>(())
/// ```
pub fn norm(s: &[f64], order: Norm) -> Result<f64, FloatsError> {
    let order = order.resolve()?;
    Ok(order.eval(s.iter().copied()))
}

/// Norm of `a - b`, computed without allocating the difference.
pub fn distance(a: &[f64], b: &[f64], order: Norm) -> Result<f64, FloatsError> {
    Validator::validate_equal_lengths(a, b)?;
    let order = order.resolve()?;
    Ok(order.eval(a.iter().zip(b).map(|(&x, &y)| x - y)))
}
