//! `Decimal` for `rust_decimal::Decimal`, a 96-bit exact decimal.
//!
//! Exact for the integer and short decimal rates production graphs usually
//! carry, up to about `7.9e28`. The type has no NaN or infinity: results past
//! its range saturate to `MAX`/`MIN`, and undefined results (square roots and
//! fractional powers of negatives) become zero.
//!
//! Every result is normalized, so `1.5 * 2` displays as `3` rather than `3.0`.

use super::decimal::Decimal;
use super::format::to_precision;
use rust_decimal::prelude::{FromPrimitive, MathematicalOps, ToPrimitive};

type Exact = rust_decimal::Decimal;

/// Stands in for a result beyond the representable range.
fn overflow(negative: bool) -> Exact {
    if negative {
        Exact::MIN
    } else {
        Exact::MAX
    }
}

fn saturate(n: f64) -> Exact {
    if n.is_nan() {
        return Exact::ZERO;
    }
    <Exact as FromPrimitive>::from_f64(n).unwrap_or_else(|| overflow(n < 0.0))
}

/// One Newton step on `y^3 = x`, recovering the digits an `f64` guess lost.
fn refine_cbrt(x: Exact, y: Exact) -> Option<Exact> {
    let residual = y.checked_mul(y)?.checked_mul(y)?.checked_sub(x)?;
    let slope = Exact::from(3).checked_mul(y)?.checked_mul(y)?;
    y.checked_sub(residual.checked_div(slope)?)
}

impl Decimal for Exact {
    fn from_f64(n: f64) -> Self {
        saturate(n).normalize()
    }

    fn add(&self, other: &Self) -> Self {
        self.saturating_add(*other).normalize()
    }

    fn sub(&self, other: &Self) -> Self {
        self.saturating_sub(*other).normalize()
    }

    fn mul(&self, other: &Self) -> Self {
        self.saturating_mul(*other).normalize()
    }

    fn div(&self, other: &Self) -> Self {
        match self.checked_div(*other) {
            Some(quotient) => quotient.normalize(),
            None if self.is_zero() => Exact::ZERO,
            None => overflow(self.is_sign_negative() != other.is_sign_negative()),
        }
    }

    fn pow(&self, exponent: &Self) -> Self {
        if let Some(power) = self.checked_powd(*exponent) {
            return power.normalize();
        }
        if !self.is_sign_negative() {
            return overflow(false);
        }
        if !exponent.fract().is_zero() {
            return Exact::ZERO;
        }
        let odd = !(*exponent % Exact::TWO).is_zero();
        overflow(odd)
    }

    fn sqrt(&self) -> Self {
        MathematicalOps::sqrt(self)
            .map(|root| root.normalize())
            .unwrap_or(Exact::ZERO)
    }

    fn cbrt(&self) -> Self {
        let guess = saturate(ToPrimitive::to_f64(self).unwrap_or(0.0).cbrt());
        if guess.is_zero() {
            return guess;
        }
        refine_cbrt(*self, guess).unwrap_or(guess).normalize()
    }

    fn abs(&self) -> Self {
        Exact::abs(self)
    }

    fn floor(&self) -> Self {
        Exact::floor(self).normalize()
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn less_than(&self, other: &Self) -> bool {
        self < other
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn to_precision(&self, precision: usize) -> String {
        to_precision(Decimal::to_f64(self), precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::{DecimalOps, NumberOps};
    use rstest::rstest;

    fn exact(n: f64) -> Exact {
        <Exact as Decimal>::from_f64(n)
    }

    #[rstest]
    #[case(2.0, "2")]
    #[case(0.5, "0.5")]
    #[case(-1.25, "-1.25")]
    #[case(1e20, "100000000000000000000")]
    fn test_from_f64_normalizes(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(exact(n).to_string(), expected);
    }

    #[test]
    fn test_arithmetic_is_exact() {
        // 0.1 + 0.2 is exactly 0.3 here, unlike f64.
        let sum = Decimal::add(&exact(0.1), &exact(0.2));
        assert_eq!(sum, exact(0.3));
        assert_eq!(Decimal::mul(&exact(1.5), &exact(2.0)).to_string(), "3");
        assert_eq!(Decimal::div(&exact(1.0), &exact(8.0)), exact(0.125));
        assert_eq!(Decimal::sub(&exact(8.0), &exact(10.0)), exact(-2.0));
        assert_eq!(Decimal::pow(&exact(3.0), &exact(4.0)), exact(81.0));
        assert_eq!(Decimal::pow(&exact(-2.0), &exact(3.0)), exact(-8.0));
    }

    #[test]
    fn test_roots() {
        let root = Decimal::sqrt(&exact(256.0));
        assert!((Decimal::to_f64(&root) - 16.0).abs() < 1e-12);
        assert_eq!(Decimal::cbrt(&exact(64.0)), exact(4.0));
        assert_eq!(Decimal::cbrt(&exact(-27.0)), exact(-3.0));
        assert_eq!(Decimal::cbrt(&Exact::ZERO), Exact::ZERO);
        let root = Decimal::cbrt(&exact(2.0));
        assert!((Decimal::to_f64(&root) - 2f64.cbrt()).abs() < 1e-12);
    }

    #[test]
    fn test_unrepresentable_results() {
        assert_eq!(Decimal::sqrt(&exact(-4.0)), Exact::ZERO);
        assert_eq!(Decimal::div(&exact(1.0), &Exact::ZERO), Exact::MAX);
        assert_eq!(Decimal::div(&exact(-1.0), &Exact::ZERO), Exact::MIN);
        assert_eq!(Decimal::div(&Exact::ZERO, &Exact::ZERO), Exact::ZERO);
        assert_eq!(Decimal::mul(&Exact::MAX, &exact(2.0)), Exact::MAX);
        assert_eq!(exact(f64::NAN), Exact::ZERO);
        assert_eq!(exact(f64::INFINITY), Exact::MAX);
        assert_eq!(exact(f64::NEG_INFINITY), Exact::MIN);
    }

    #[test]
    fn test_floor_and_ordering() {
        assert_eq!(Decimal::floor(&exact(2.5)), exact(2.0));
        assert_eq!(Decimal::floor(&exact(-0.5)), exact(-1.0));
        assert_eq!(Decimal::abs(&exact(-0.5)), exact(0.5));
        assert!(exact(-5.0).less_than(&exact(2.0)));
        assert!(!exact(2.0).less_than(&exact(2.0)));
        assert!(exact(2.0).equals(&Decimal::mul(&exact(0.5), &exact(4.0))));
    }

    #[test]
    fn test_format_through_decimal_ops() {
        let ops = DecimalOps::<Exact>::new();
        assert_eq!(ops.format(&exact(1.0), 1), "");
        assert_eq!(ops.format(&exact(-1.0), 2), "-");
        assert_eq!(ops.format(&exact(3.0), 0), "3 ");
        assert_eq!(ops.format(&exact(1.5), 1), "1.50 ");
        assert_eq!(ops.format(&exact(-9999.0), 0), "-9999 ");
        assert_eq!(ops.format(&exact(123.25), 0), "123.25 ");
    }
}
