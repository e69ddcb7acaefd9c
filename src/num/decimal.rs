//! Adapter for decimal-like number types.
//!
//! Any type implementing `Decimal` becomes a polynomial backend through
//! `DecimalOps`, without any change to the polynomial, root or production code.

use super::format::{DEFAULT_PRECISION, SHORT_FORM_LIMIT};
use super::NumberOps;
use std::fmt;

/// The minimal algebraic contract a number type must meet to back a polynomial.
///
/// The `_f64` methods have default implementations that go through `from_f64`.
/// Types with a cheaper mixed-type path should override them.
pub trait Decimal: Clone + fmt::Debug + fmt::Display {
    fn from_f64(n: f64) -> Self;

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn div(&self, other: &Self) -> Self;
    fn pow(&self, exponent: &Self) -> Self;
    fn sqrt(&self) -> Self;
    fn cbrt(&self) -> Self;
    fn abs(&self) -> Self;
    fn floor(&self) -> Self;

    fn equals(&self, other: &Self) -> bool;
    fn less_than(&self, other: &Self) -> bool;

    fn to_f64(&self) -> f64;
    fn to_precision(&self, precision: usize) -> String;

    fn mul_f64(&self, n: f64) -> Self {
        Decimal::mul(self, &Self::from_f64(n))
    }

    fn div_f64(&self, n: f64) -> Self {
        Decimal::div(self, &Self::from_f64(n))
    }

    fn pow_f64(&self, n: f64) -> Self {
        Decimal::pow(self, &Self::from_f64(n))
    }
}

/// Basic operations for a `Decimal` type.
///
/// Holds the type's zero and one, built once through `Decimal::from_f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalOps<D> {
    zero: D,
    one: D,
}

impl<D: Decimal> DecimalOps<D> {
    pub fn new() -> Self {
        Self {
            zero: D::from_f64(0.0),
            one: D::from_f64(1.0),
        }
    }
}

impl<D: Decimal> Default for DecimalOps<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decimal> NumberOps for DecimalOps<D> {
    type Num = D;

    fn zero(&self) -> D {
        self.zero.clone()
    }

    fn one(&self) -> D {
        self.one.clone()
    }

    fn equals(&self, a: &D, b: &D) -> bool {
        a.equals(b)
    }

    fn lt(&self, a: &D, b: &D) -> bool {
        a.less_than(b)
    }

    fn add(&self, a: &D, b: &D) -> D {
        Decimal::add(a, b)
    }

    fn sub(&self, a: &D, b: &D) -> D {
        Decimal::sub(a, b)
    }

    fn mul(&self, a: &D, b: f64) -> D {
        a.mul_f64(b)
    }

    fn mul_t(&self, a: &D, b: &D) -> D {
        Decimal::mul(a, b)
    }

    fn div(&self, a: &D, b: f64) -> D {
        a.div_f64(b)
    }

    fn div_t(&self, a: &D, b: &D) -> D {
        Decimal::div(a, b)
    }

    fn pow(&self, a: &D, b: f64) -> D {
        a.pow_f64(b)
    }

    fn pow_t(&self, a: &D, b: &D) -> D {
        Decimal::pow(a, b)
    }

    fn sqrt(&self, a: &D) -> D {
        Decimal::sqrt(a)
    }

    fn cbrt(&self, a: &D) -> D {
        Decimal::cbrt(a)
    }

    fn to_number(&self, a: &D) -> f64 {
        a.to_f64()
    }

    fn format(&self, c: &D, degree: usize) -> String {
        // TODO: share the unit/short-form rules with `NativeOps::format` once both
        // backends expose a common sign/integer test.
        if degree != 0 && c.equals(&self.one) {
            return String::new();
        }
        if degree != 0 && c.equals(&D::from_f64(-1.0)) {
            return "-".to_string();
        }
        if c.abs().less_than(&D::from_f64(SHORT_FORM_LIMIT)) {
            // crude integer test
            if c.floor().equals(c) {
                return format!("{} ", c);
            }
            return format!("{} ", c.to_precision(DEFAULT_PRECISION));
        }
        format!("{} ", c)
    }
}
