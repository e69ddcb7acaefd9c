//! polynomial.rs
//! Immutable, normalized polynomials. Every transform returns a new value.

use crate::error::{PolyError, Result};
use crate::num::{NativeOps, NumberOps};
use crate::solver::{self, BisectOptions, PolynomialLike};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Add;

/// Default tolerance of `Polynomial::is_root`.
pub const DEFAULT_ROOT_TOLERANCE: f64 = 1e-2;

/// A polynomial in `t`, with coefficients in the number format of its backend `O`.
///
/// Construct with `parse`, which guarantees the normal form: at least one
/// coefficient, and no trailing (highest-degree) zeros except for the zero
/// polynomial `[0]`.
pub struct Polynomial<O: NumberOps = NativeOps> {
    coeffs: SmallVec<[O::Num; 4]>,
    ops: O,
}

/// Polynomials over `f64`.
pub type NativePolynomial = Polynomial<NativeOps>;

impl Polynomial<NativeOps> {
    /// Shorthand for `parse` with the `f64` backend.
    pub fn native<I: IntoIterator<Item = f64>>(coeffs: I) -> Self {
        Self::parse(coeffs, NativeOps::new())
    }
}

impl<O: NumberOps> Polynomial<O> {
    /// Builds a polynomial from a list of coefficients, constant term first.
    ///
    /// ```
    /// use production_poly::Polynomial;
    /// let p = Polynomial::native([3.0, 2.0, 1.0, 0.0, 0.0]);
    /// assert_eq!(p.coeffs(), &[3.0, 2.0, 1.0]);
    /// assert_eq!(p.to_string(), "t^2 + 2 t + 3");
    /// ```
    pub fn parse<I: IntoIterator<Item = O::Num>>(coeffs: I, ops: O) -> Self {
        let mut coeffs: SmallVec<[O::Num; 4]> = coeffs.into_iter().collect();
        let zero = ops.zero();
        while coeffs.last().map_or(false, |c| ops.equals(c, &zero)) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(zero);
        }
        Self { coeffs, ops }
    }

    /// The constant polynomial zero.
    pub fn zero(ops: O) -> Self {
        Self::parse(std::iter::empty(), ops)
    }

    pub fn coeffs(&self) -> &[O::Num] {
        &self.coeffs
    }

    pub fn ops(&self) -> &O {
        &self.ops
    }

    /// The highest exponent. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn is_constant(&self) -> bool {
        self.degree() == 0
    }

    pub fn constant_term(&self) -> O::Num {
        self.coeffs.first().cloned().unwrap_or_else(|| self.ops.zero())
    }

    /// Evaluates the polynomial at time `t`.
    pub fn evaluate(&self, t: f64) -> O::Num {
        self.evaluate_degree(t, 0)
    }

    /// Evaluates the terms of degree `degree` and above, each coefficient `c[i]`
    /// weighted by `i`.
    ///
    /// ```
    /// use production_poly::Polynomial;
    /// let p = Polynomial::native([3.0, 2.0, 1.0]);
    /// assert_eq!(p.evaluate_degree(2.0, 0), 11.0);
    /// assert_eq!(p.evaluate_degree(2.0, 1), 6.0);
    /// assert_eq!(p.evaluate_degree(2.0, 2), 2.0);
    /// ```
    pub fn evaluate_degree(&self, t: f64, degree: usize) -> O::Num {
        if degree > 0 {
            let shifted = Self::parse(
                self.coeffs
                    .iter()
                    .enumerate()
                    .skip(degree)
                    .map(|(i, c)| self.ops.mul(c, i as f64)),
                self.ops.clone(),
            );
            return shifted.evaluate_degree(t, 0);
        }
        // Avoids 0^0 in the general sum.
        if t == 0.0 {
            return self.constant_term();
        }
        self.coeffs
            .iter()
            .enumerate()
            .fold(self.ops.zero(), |acc, (i, c)| {
                let term = self.ops.mul(c, t.powf(i as f64));
                self.ops.add(&acc, &term)
            })
    }

    /// Adds two polynomials term by term.
    pub fn add(&self, other: &Self) -> Self {
        let zero = self.ops.zero();
        let len = self.coeffs.len().max(other.coeffs.len());
        let sums = (0..len).map(|i| {
            let a = self.coeffs.get(i).unwrap_or(&zero);
            let b = other.coeffs.get(i).unwrap_or(&zero);
            self.ops.add(a, b)
        });
        Self::parse(sums, self.ops.clone())
    }

    /// Adds every polynomial in `others` to this one.
    pub fn sum<I>(&self, others: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        others
            .into_iter()
            .fold(self.clone(), |acc, p| acc.add(p.borrow()))
    }

    /// Adds a list of polynomials. The list must not be empty, since its first
    /// element supplies the backend.
    pub fn sums<I>(polys: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        let mut polys = polys.into_iter();
        let first = polys.next().ok_or(PolyError::EmptySum)?;
        Ok(first.borrow().sum(polys))
    }

    /// Multiplies every coefficient by a plain scalar.
    pub fn mul(&self, scalar: f64) -> Self {
        Self::parse(
            self.coeffs.iter().map(|c| self.ops.mul(c, scalar)),
            self.ops.clone(),
        )
    }

    /// Multiplies every coefficient by a scalar of the backend's number type.
    pub fn mul_t(&self, scalar: &O::Num) -> Self {
        Self::parse(
            self.coeffs.iter().map(|c| self.ops.mul_t(c, scalar)),
            self.ops.clone(),
        )
    }

    /// Is `t` a root, within `DEFAULT_ROOT_TOLERANCE`?
    pub fn is_root(&self, t: f64) -> bool {
        self.is_root_within(t, DEFAULT_ROOT_TOLERANCE)
    }

    /// Is `t` a root? A zero `tolerance` demands an exact zero.
    pub fn is_root_within(&self, t: f64, tolerance: f64) -> bool {
        let value = self.ops.to_number(&self.evaluate(t));
        if tolerance == 0.0 {
            value == 0.0
        } else {
            value.abs() < tolerance
        }
    }

    /// Can `find_roots_quick` solve this polynomial?
    pub fn is_root_quick(&self) -> bool {
        self.ops.is_zero(&self.constant_term()) || self.degree() <= 3
    }

    pub fn is_root_bisectable(&self) -> bool {
        solver::is_root_bisectable(self)
    }

    pub fn find_roots_quick(&self) -> Result<Vec<f64>> {
        solver::find_roots_quick(self)
    }

    pub fn find_root_bisect(&self, opts: BisectOptions) -> Result<f64> {
        solver::find_root_bisect(self, opts)
    }

    /// Each coefficient formatted by the backend, paired with its degree,
    /// highest degree first. Useful for custom (e.g. HTML) rendering.
    pub fn format(&self) -> Vec<(String, usize)> {
        self.coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| (self.ops.format(c, i), i))
            .rev()
            .collect()
    }

    /// Rendered terms, highest degree first: `["t^2", "2 t", "3"]`.
    pub fn formats(&self) -> Vec<String> {
        self.format()
            .into_iter()
            .map(|(c, i)| match i {
                0 => c.trim().to_string(),
                1 => format!("{}t", c).trim().to_string(),
                _ => format!("{}t^{}", c, i).trim().to_string(),
            })
            .collect()
    }
}

impl<O: NumberOps> PolynomialLike for Polynomial<O> {
    type Ops = O;

    fn ops(&self) -> &O {
        &self.ops
    }

    fn coeffs(&self) -> &[O::Num] {
        &self.coeffs
    }

    fn constant_term(&self) -> O::Num {
        Polynomial::constant_term(self)
    }

    fn evaluate(&self, t: f64) -> O::Num {
        Polynomial::evaluate(self, t)
    }
}

impl<O: NumberOps> Clone for Polynomial<O> {
    fn clone(&self) -> Self {
        Self {
            coeffs: self.coeffs.clone(),
            ops: self.ops.clone(),
        }
    }
}

impl<O: NumberOps> fmt::Debug for Polynomial<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Polynomial").field(&self.coeffs.as_slice()).finish()
    }
}

/// Equal when the coefficients are equal according to the backend.
impl<O: NumberOps> PartialEq for Polynomial<O> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| self.ops.equals(a, b))
    }
}

/// Renders highest degree first: `"t^2 + 0 t + 2"`.
impl<O: NumberOps> fmt::Display for Polynomial<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formats().join(" + "))
    }
}

impl<O: NumberOps> Add for &Polynomial<O> {
    type Output = Polynomial<O>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

// Stored as the bare coefficient list; the backend is not part of the data.
impl<O> Serialize for Polynomial<O>
where
    O: NumberOps,
    O::Num: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.coeffs.as_slice().serialize(serializer)
    }
}

impl<'de, O> Deserialize<'de> for Polynomial<O>
where
    O: NumberOps + Default,
    O::Num: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let coeffs = Vec::<O::Num>::deserialize(deserializer)?;
        Ok(Self::parse(coeffs, O::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::testing::{assert_close, for_each_backend, num, poly_in};
    use crate::num::{BigNumber, DecimalOps};
    use rstest::rstest;

    fn poly(coeffs: &[f64]) -> NativePolynomial {
        Polynomial::native(coeffs.iter().copied())
    }

    for_each_backend! {
        #[rstest]
        #[case(&[0.0], 0.0, 0.0)]
        #[case(&[2.0], 0.0, 2.0)]
        #[case(&[2.0], 1.0, 2.0)]
        #[case(&[2.0], 2.0, 2.0)]
        #[case(&[2.0, 3.0], 0.0, 2.0)]
        #[case(&[2.0, 3.0], 1.0, 5.0)]
        #[case(&[2.0, 3.0], 2.0, 8.0)]
        #[case(&[2.0, 3.0], 3.0, 11.0)]
        #[case(&[2.0, 3.0, 1.0], 0.0, 2.0)]
        #[case(&[2.0, 3.0, 1.0], 1.0, 6.0)]
        #[case(&[2.0, 3.0, 1.0], 2.0, 12.0)]
        #[case(&[2.0, 3.0, 1.0], 3.0, 20.0)]
        #[case(&[2.0, 3.0, 1.0], 0.5, 3.75)]
        fn test_evaluate(#[case] coeffs: &[f64], #[case] t: f64, #[case] expected: f64) {
            let ops = ops();
            let value = poly_in(&ops, coeffs).evaluate(t);
            assert_close(ops.to_number(&value), expected, 1e-12);
        }

        #[rstest]
        #[case(&[0.0])]
        #[case(&[2.0])]
        #[case(&[2.0, 3.0])]
        #[case(&[2.0, 3.0, 1.0])]
        fn test_normalize(#[case] coeffs: &[f64]) {
            let ops = ops();
            let p = poly_in(&ops, coeffs);
            assert_eq!(p.degree(), coeffs.len() - 1);
            assert_eq!(Polynomial::parse(p.coeffs().to_vec(), ops.clone()), p);

            let padded: Vec<f64> = coeffs.iter().copied().chain([0.0; 4]).collect();
            assert_eq!(poly_in(&ops, &padded), p);

            let gap: Vec<f64> = coeffs.iter().copied().chain([0.0, 1.0, 0.0, 0.0]).collect();
            assert_eq!(poly_in(&ops, &gap), poly_in(&ops, &gap[..gap.len() - 2]));
            assert_eq!(poly_in(&ops, &gap).degree(), gap.len() - 3);
        }

        #[rstest]
        #[case(&[0.0], "0")]
        #[case(&[1.0], "1")]
        #[case(&[0.0, 1.0], "t + 0")]
        #[case(&[2.0, 1.0], "t + 2")]
        #[case(&[2.0, 3.0], "3 t + 2")]
        #[case(&[2.0, 3.0, 4.0], "4 t^2 + 3 t + 2")]
        #[case(&[2.0, 3.0, 1.0], "t^2 + 3 t + 2")]
        #[case(&[2.0, 0.0, 1.0], "t^2 + 0 t + 2")]
        #[case(&[-1.0], "-1")]
        #[case(&[-2.0], "-2")]
        #[case(&[0.5], "0.500")]
        #[case(&[1.5], "1.50")]
        #[case(&[-0.5], "-0.500")]
        #[case(&[-1.5], "-1.50")]
        #[case(&[9999.0], "9999")]
        #[case(&[-9999.0], "-9999")]
        #[case(&[0.0, -1.0], "-t + 0")]
        #[case(&[0.0, -2.0], "-2 t + 0")]
        #[case(&[0.0, 0.5], "0.500 t + 0")]
        #[case(&[0.0, 1.5], "1.50 t + 0")]
        #[case(&[0.0, -0.5], "-0.500 t + 0")]
        #[case(&[0.0, -1.5], "-1.50 t + 0")]
        #[case(&[0.0, 9999.0], "9999 t + 0")]
        #[case(&[0.0, -9999.0], "-9999 t + 0")]
        fn test_to_string(#[case] coeffs: &[f64], #[case] expected: &str) {
            assert_eq!(poly_in(&ops(), coeffs).to_string(), expected);
        }

        #[test]
        fn test_negated_zero_coefficient() {
            let ops = ops();
            let p = poly_in(&ops, &[2.0, 0.0, 1.0]).mul(-1.0);
            assert_eq!(p.to_string(), "-t^2 + 0 t + -2");
            assert!(ops.is_zero(&p.coeffs()[1]));
        }

        #[test]
        fn test_add_and_scale() {
            let ops = ops();
            let a = poly_in(&ops, &[3.0, 2.0, 1.0]);
            let b = poly_in(&ops, &[1.0, 2.0, 3.0]);
            assert_eq!(a.add(&b), poly_in(&ops, &[4.0, 4.0, 4.0]));
            assert_eq!(a.mul(5.0), poly_in(&ops, &[15.0, 10.0, 5.0]));
            assert_eq!(a.mul_t(&num(&ops, 0.5)), poly_in(&ops, &[1.5, 1.0, 0.5]));
            assert_eq!(a.add(&poly_in(&ops, &[0.0, 0.0, -1.0])).degree(), 1);
        }
    }

    #[test]
    fn test_normalize_empty_is_zero() {
        let p = poly(&[]);
        assert_eq!(p.coeffs(), &[0.0]);
        assert_eq!(p.degree(), 0);
        assert!(p.is_constant());
        assert_eq!(p.to_string(), "0");
        assert_eq!(p, Polynomial::zero(NativeOps::new()));
    }

    #[test]
    fn test_degree_and_constant_term() {
        let p = poly(&[9.0, 8.0, 7.0, 6.0]);
        assert_eq!(p.degree(), 3);
        assert!(!p.is_constant());
        assert_eq!(p.constant_term(), 9.0);
    }

    #[test]
    fn test_evaluate_degree_past_the_end_is_zero() {
        assert_eq!(poly(&[3.0, 2.0, 1.0]).evaluate_degree(2.0, 5), 0.0);
    }

    #[test]
    fn test_add() {
        let a = poly(&[3.0, 2.0, 1.0]);
        let b = poly(&[1.0, 2.0, 3.0]);
        assert_eq!(a.add(&b), poly(&[4.0, 4.0, 4.0]));
        assert_eq!(b.add(&a), a.add(&b));
        assert_eq!(a.add(&poly(&[5.0])), poly(&[8.0, 2.0, 1.0]));
        assert_eq!(a.add(&poly(&[])), a);
        assert_eq!(&a + &b, poly(&[4.0, 4.0, 4.0]));
        // Cancelling leading terms renormalizes.
        assert_eq!(a.add(&poly(&[0.0, 0.0, -1.0])).degree(), 1);
    }

    #[test]
    fn test_sum() {
        let ps = vec![poly(&[3.0, 2.0, 1.0]), poly(&[1.0, 2.0, 3.0]), poly(&[1.0, 1.0, 1.0])];
        assert_eq!(NativePolynomial::sums(&ps).unwrap(), poly(&[5.0, 5.0, 5.0]));
        assert_eq!(ps[0].sum(&ps[1..]), poly(&[5.0, 5.0, 5.0]));
        assert_eq!(NativePolynomial::sums(ps).unwrap(), poly(&[5.0, 5.0, 5.0]));
    }

    #[test]
    fn test_sums_empty_fails() {
        let empty: Vec<NativePolynomial> = vec![];
        let err = NativePolynomial::sums(empty).unwrap_err();
        assert_eq!(err, PolyError::EmptySum);
        assert_eq!(err.to_string(), "cannot sum an empty list of polynomials");
    }

    #[test]
    fn test_scalar_multiplication() {
        let p = poly(&[3.0, 2.0, 1.0]);
        assert_eq!(p.mul(5.0), poly(&[15.0, 10.0, 5.0]));
        assert_eq!(p.mul(0.0), poly(&[0.0]));
        assert_eq!(p.mul_t(&5.0), poly(&[15.0, 10.0, 5.0]));
        // `mul` leaves the receiver unchanged.
        assert_eq!(p.coeffs(), &[3.0, 2.0, 1.0]);
    }

    #[rstest]
    #[case(&[0.0, 123.5], "123.5 t + 0")]
    #[case(&[1e25], "1e+25")]
    #[case(&[0.0, 1.5e25], "1.5e+25 t + 0")]
    #[case(&[1e20], "100000000000000000000")]
    #[case(&[-2e21, 0.0, 1.0], "t^2 + 0 t + -2e+21")]
    fn test_to_string_full_form(#[case] coeffs: &[f64], #[case] expected: &str) {
        assert_eq!(poly(coeffs).to_string(), expected);
    }

    #[test]
    fn test_format_pairs() {
        let p = poly(&[3.0, 2.0, 1.0]);
        assert_eq!(
            p.format(),
            vec![(String::new(), 2), ("2 ".to_string(), 1), ("3 ".to_string(), 0)]
        );
        assert_eq!(p.formats(), vec!["t^2", "2 t", "3"]);
    }

    #[test]
    fn test_is_root_tolerance() {
        let p = poly(&[-8.0, 2.0]);
        assert!(p.is_root(4.0));
        assert!(p.is_root_within(4.0, 0.0));
        assert!(p.is_root(4.001));
        assert!(!p.is_root_within(4.001, 0.0));
        assert!(!p.is_root(4.1));
    }

    #[test]
    fn test_big_number_past_f64() {
        // 1e400 t^2 at t = 1e10 is 1e420.
        let ops = DecimalOps::<BigNumber>::new();
        let huge = Polynomial::parse([BigNumber::ZERO, BigNumber::ZERO, BigNumber::new(1.0, 400)], ops);
        let value = huge.evaluate(1e10);
        assert_eq!(value.exponent(), 420);
        assert_eq!(huge.to_string(), "1e+400 t^2 + 0 t + 0");
    }

    #[test]
    fn test_serde_normalizes_on_load() {
        let p = poly(&[2.0, 3.0, 1.0]);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[2.0,3.0,1.0]");

        let loaded: NativePolynomial = serde_json::from_str("[2.0, 3.0, 1.0, 0.0, 0.0]").unwrap();
        assert_eq!(loaded, p);
        let loaded: NativePolynomial = serde_json::from_str("[]").unwrap();
        assert_eq!(loaded.coeffs(), &[0.0]);
    }
}
