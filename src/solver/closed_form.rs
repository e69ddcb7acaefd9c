//! closed_form.rs
//! Exact roots for polynomials up to degree 3.

use super::PolynomialLike;
use crate::error::{PolyError, Result};
use crate::num::NumberOps;

/// Finds roots with the closed-form formulas.
///
/// A zero constant term short-circuits to `[0.0]`. Quadratics return both roots,
/// even when they coincide or are NaN (negative discriminant). Cubics return the
/// single real root of the depressed-cubic formula. Degree 4 and up is an error.
pub fn find_roots_quick<P: PolynomialLike + ?Sized>(poly: &P) -> Result<Vec<f64>> {
    let ops = poly.ops();
    if ops.is_zero(&poly.constant_term()) {
        return Ok(vec![0.0]);
    }
    let roots = match poly.coeffs() {
        [_] => vec![],
        [b, a] => vec![linear(ops, a, b)],
        [c, b, a] => quadratic(ops, a, b, c).to_vec(),
        [d, c, b, a] => vec![cubic(ops, a, b, c, d)],
        coeffs => {
            return Err(PolyError::UnsupportedDegree {
                degree: coeffs.len().saturating_sub(1),
                length: coeffs.len(),
            })
        }
    };
    Ok(roots.iter().map(|r| ops.to_number(r)).collect())
}

/// `a t + b = 0`
fn linear<O: NumberOps>(ops: &O, a: &O::Num, b: &O::Num) -> O::Num {
    ops.div_t(&ops.mul(b, -1.0), a)
}

/// `a t^2 + b t + c = 0`
fn quadratic<O: NumberOps>(ops: &O, a: &O::Num, b: &O::Num, c: &O::Num) -> [O::Num; 2] {
    let disc = ops.sub(&ops.mul_t(b, b), &ops.mul(&ops.mul_t(a, c), 4.0));
    let sqrt_disc = ops.sqrt(&disc);
    let neg_b = ops.mul(b, -1.0);
    let denom = ops.mul(a, 2.0);
    [
        ops.div_t(&ops.add(&neg_b, &sqrt_disc), &denom),
        ops.div_t(&ops.sub(&neg_b, &sqrt_disc), &denom),
    ]
}

/// `a t^3 + b t^2 + c t + d = 0`, real root only.
fn cubic<O: NumberOps>(ops: &O, a: &O::Num, b: &O::Num, c: &O::Num, d: &O::Num) -> O::Num {
    let p = ops.div_t(&ops.mul(b, -1.0), &ops.mul(a, 3.0));
    let q = ops.add(
        &ops.pow(&p, 3.0),
        &ops.div_t(
            &ops.sub(&ops.mul_t(b, c), &ops.mul(&ops.mul_t(a, d), 3.0)),
            &ops.mul(&ops.mul_t(a, a), 6.0),
        ),
    );
    let r = ops.div_t(c, &ops.mul(a, 3.0));
    let disc = ops.add(
        &ops.mul_t(&q, &q),
        &ops.pow(&ops.sub(&r, &ops.mul_t(&p, &p)), 3.0),
    );
    let sqrt_disc = ops.sqrt(&disc);
    ops.add(
        &ops.add(&p, &ops.cbrt(&ops.add(&q, &sqrt_disc))),
        &ops.cbrt(&ops.sub(&q, &sqrt_disc)),
    )
}
