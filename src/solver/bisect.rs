//! bisect.rs
//! Numeric root search for polynomials that rise monotonically from a negative start.

use super::{NumOf, PolynomialLike};
use crate::error::{PolyError, Result};
use crate::num::NumberOps;

/// Iteration budget used by `BisectOptions::default()`.
pub const DEFAULT_BISECT_ITERATIONS: usize = 20;

/// Configuration for `find_root_bisect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BisectOptions {
    /// Number of interval halvings before giving up and returning the midpoint.
    pub iterations: usize,
}

impl Default for BisectOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_BISECT_ITERATIONS,
        }
    }
}

/// A polynomial is bisectable when its constant term is negative and every other
/// coefficient is non-negative. It then has exactly one positive root.
pub fn is_root_bisectable<P: PolynomialLike + ?Sized>(poly: &P) -> bool {
    let ops = poly.ops();
    let zero = ops.zero();
    match poly.coeffs().split_first() {
        Some((p0, rest)) => {
            ops.lt(p0, &zero) && !rest.is_empty() && rest.iter().all(|pn| ops.gte(pn, &zero))
        }
        None => false,
    }
}

/// An upper bound for the root of a bisectable polynomial.
///
/// For each non-zero term `pn t^n`, the root cannot exceed `(-p0 / pn)^(1/n)`;
/// the smallest such bound wins. `None` if there are no non-zero terms.
pub fn find_root_bisect_max<P: PolynomialLike + ?Sized>(poly: &P) -> Option<NumOf<P>> {
    let ops = poly.ops();
    let (p0, rest) = poly.coeffs().split_first()?;
    let neg_p0 = ops.mul(p0, -1.0);
    rest.iter()
        .enumerate()
        .filter(|(_, pn)| !ops.is_zero(pn))
        .map(|(i, pn)| ops.pow(&ops.div_t(&neg_p0, pn), 1.0 / (i + 1) as f64))
        .fold(None, |min, bound| match min {
            Some(min) if !ops.lt(&bound, &min) => Some(min),
            _ => Some(bound),
        })
}

/// Finds the positive root of a bisectable polynomial.
pub fn find_root_bisect<P: PolynomialLike + ?Sized>(poly: &P, opts: BisectOptions) -> Result<f64> {
    if !is_root_bisectable(poly) {
        return Err(PolyError::NotBisectable);
    }
    let max = find_root_bisect_max(poly).ok_or(PolyError::NotBisectable)?;
    let max = poly.ops().to_number(&max);
    if !max.is_finite() {
        return Err(PolyError::BoundTooLarge);
    }
    Ok(bisect(poly, 0.0, max, opts.iterations))
}

/// Halves `[min, max]` `iterations` times, keeping the half where the polynomial
/// changes sign. Returns early on an exact zero, otherwise the final midpoint.
pub fn bisect<P: PolynomialLike + ?Sized>(poly: &P, mut min: f64, mut max: f64, iterations: usize) -> f64 {
    let ops = poly.ops();
    let zero = ops.zero();
    for i in 0..iterations {
        let t = (min + max) / 2.0;
        let value = poly.evaluate(t);
        log::trace!("bisect iteration {}: f({}) = {:?} in [{}, {}]", i, t, value, min, max);
        if ops.equals(&value, &zero) {
            return t;
        }
        if ops.lt(&value, &zero) {
            min = t;
        } else {
            max = t;
        }
    }
    (min + max) / 2.0
}
