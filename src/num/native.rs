//! Backend for built-in floating point numbers.

use super::format::{to_precision, to_shortest, DEFAULT_PRECISION, SHORT_FORM_LIMIT};
use super::NumberOps;
use num_traits::{Float, NumCast};
use std::fmt;
use std::marker::PhantomData;

/// Basic operations for built-in floats. `NativeOps` alone means `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeOps<F = f64> {
    _float: PhantomData<F>,
}

impl<F> NativeOps<F> {
    pub const fn new() -> Self {
        Self { _float: PhantomData }
    }
}

impl<F> Default for NativeOps<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
fn scalar<F: Float>(b: f64) -> F {
    <F as NumCast>::from(b).unwrap_or_else(F::nan)
}

impl<F> NumberOps for NativeOps<F>
where
    F: Float + fmt::Debug + fmt::Display + fmt::LowerExp,
{
    type Num = F;

    fn zero(&self) -> F {
        F::zero()
    }

    fn one(&self) -> F {
        F::one()
    }

    fn equals(&self, a: &F, b: &F) -> bool {
        a == b
    }

    fn lt(&self, a: &F, b: &F) -> bool {
        a < b
    }

    fn add(&self, a: &F, b: &F) -> F {
        *a + *b
    }

    fn sub(&self, a: &F, b: &F) -> F {
        *a - *b
    }

    fn mul(&self, a: &F, b: f64) -> F {
        *a * scalar(b)
    }

    fn mul_t(&self, a: &F, b: &F) -> F {
        *a * *b
    }

    fn div(&self, a: &F, b: f64) -> F {
        *a / scalar(b)
    }

    fn div_t(&self, a: &F, b: &F) -> F {
        *a / *b
    }

    fn pow(&self, a: &F, b: f64) -> F {
        a.powf(scalar(b))
    }

    fn pow_t(&self, a: &F, b: &F) -> F {
        a.powf(*b)
    }

    fn sqrt(&self, a: &F) -> F {
        a.sqrt()
    }

    fn cbrt(&self, a: &F) -> F {
        a.cbrt()
    }

    fn to_number(&self, a: &F) -> f64 {
        a.to_f64().unwrap_or(f64::NAN)
    }

    fn format(&self, c: &F, degree: usize) -> String {
        if degree != 0 && *c == F::one() {
            return String::new();
        }
        if degree != 0 && *c == -F::one() {
            return "-".to_string();
        }
        if c.abs() < scalar(SHORT_FORM_LIMIT) && c.fract() != F::zero() {
            return format!("{} ", to_precision(self.to_number(c), DEFAULT_PRECISION));
        }
        format!("{} ", to_shortest(*c))
    }
}
