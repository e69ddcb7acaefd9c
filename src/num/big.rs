//! big.rs
//! A mantissa/exponent number for values far beyond `f64::MAX`.
//!
//! `value = mantissa * 10^exponent`, with `1 <= |mantissa| < 10` (or a zero
//! mantissa with a zero exponent). Precision is that of the `f64` mantissa,
//! about 17 significant digits, while the range is bounded only by `i64`.

use super::decimal::Decimal;
use super::format::{to_precision, to_shortest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// Exponent gap beyond which the smaller addend is below mantissa precision.
const MAX_SIGNIFICANT_DIGITS: i64 = 17;

/// Exponents in this range print through `f64`, as plain decimals.
const PLAIN_EXPONENT_RANGE: std::ops::Range<i64> = -6..21;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BigNumber {
    mantissa: f64,
    exponent: i64,
}

/// Multiplies `m` by `10^k` in steps that stay inside `f64` range.
fn scale(mut m: f64, mut k: i64) -> f64 {
    while k != 0 {
        let step = k.clamp(-300, 300);
        m = if step >= 0 {
            m * 10f64.powi(step as i32)
        } else {
            m / 10f64.powi((-step) as i32)
        };
        k -= step;
    }
    m
}

impl BigNumber {
    pub const ZERO: BigNumber = BigNumber { mantissa: 0.0, exponent: 0 };
    pub const ONE: BigNumber = BigNumber { mantissa: 1.0, exponent: 0 };

    /// Builds a normalized number from any mantissa and exponent.
    pub fn new(mantissa: f64, exponent: i64) -> Self {
        if mantissa == 0.0 || !mantissa.is_finite() {
            return Self { mantissa, exponent: 0 };
        }
        let mut shift = mantissa.abs().log10().floor() as i64;
        let mut m = if shift >= 0 {
            mantissa / 10f64.powi(shift as i32)
        } else {
            scale(mantissa, -shift)
        };
        // log10 can land one off near exact powers of ten.
        if m.abs() >= 10.0 {
            m /= 10.0;
            shift += 1;
        } else if m.abs() < 1.0 {
            m *= 10.0;
            shift -= 1;
        }
        Self { mantissa: m, exponent: exponent + shift }
    }

    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    /// `log10(|self|)`, for magnitudes that do not fit an `f64`.
    pub fn log10_abs(&self) -> f64 {
        self.mantissa.abs().log10() + self.exponent as f64
    }

    fn from_log10(sign: f64, log: f64) -> Self {
        if !log.is_finite() {
            return Self::new(sign * if log > 0.0 { f64::INFINITY } else { 0.0 }, 0);
        }
        let exponent = log.floor();
        Self::new(sign * 10f64.powf(log - exponent), exponent as i64)
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for BigNumber {
    fn from(n: f64) -> Self {
        Self::new(n, 0)
    }
}

impl Neg for BigNumber {
    type Output = BigNumber;

    fn neg(self) -> Self::Output {
        Self { mantissa: -self.mantissa, exponent: self.exponent }
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mantissa.is_finite() || PLAIN_EXPONENT_RANGE.contains(&self.exponent) {
            return f.write_str(&to_shortest(self.to_f64()));
        }
        let sign = if self.exponent >= 0 { "+" } else { "" };
        write!(f, "{}e{}{}", self.mantissa, sign, self.exponent)
    }
}

impl Decimal for BigNumber {
    fn from_f64(n: f64) -> Self {
        Self::from(n)
    }

    fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return *self;
        }
        let (big, small) = if self.exponent >= other.exponent {
            (self, other)
        } else {
            (other, self)
        };
        let gap = big.exponent - small.exponent;
        if gap > MAX_SIGNIFICANT_DIGITS {
            return *big;
        }
        Self::new(big.mantissa + scale(small.mantissa, -gap), big.exponent)
    }

    fn sub(&self, other: &Self) -> Self {
        Decimal::add(self, &-*other)
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(self.mantissa * other.mantissa, self.exponent + other.exponent)
    }

    fn div(&self, other: &Self) -> Self {
        Self::new(self.mantissa / other.mantissa, self.exponent - other.exponent)
    }

    fn pow(&self, exponent: &Self) -> Self {
        self.pow_f64(exponent.to_f64())
    }

    fn pow_f64(&self, n: f64) -> Self {
        // Values inside f64 range keep native precision, e.g. 3^2 stays exactly 9.
        let direct = self.to_f64().powf(n);
        if direct.is_finite() && direct != 0.0 {
            return Self::from(direct);
        }
        if self.is_zero() {
            return Self::from(0f64.powf(n));
        }
        let sign = if self.mantissa > 0.0 {
            1.0
        } else if n.fract() != 0.0 {
            return Self::from(f64::NAN);
        } else if (n as i64) % 2 == 0 {
            1.0
        } else {
            -1.0
        };
        Self::from_log10(sign, n * self.log10_abs())
    }

    fn sqrt(&self) -> Self {
        if self.mantissa < 0.0 {
            return Self::from(f64::NAN);
        }
        let odd = self.exponent.rem_euclid(2);
        Self::new(
            scale(self.mantissa, odd).sqrt(),
            (self.exponent - odd) / 2,
        )
    }

    fn cbrt(&self) -> Self {
        let rest = self.exponent.rem_euclid(3);
        Self::new(
            scale(self.mantissa, rest).cbrt(),
            (self.exponent - rest) / 3,
        )
    }

    fn abs(&self) -> Self {
        Self { mantissa: self.mantissa.abs(), exponent: self.exponent }
    }

    fn floor(&self) -> Self {
        if self.exponent < 0 {
            return if self.mantissa < 0.0 { Self::from(-1.0) } else { Self::ZERO };
        }
        if self.exponent >= MAX_SIGNIFICANT_DIGITS {
            return *self;
        }
        let value = self.to_f64();
        // Rebuilding the value from the mantissa can miss an integer by an ulp.
        // The nearest integer is exact only if it normalizes back to this number.
        let nearest = Self::from(value.round());
        if nearest.equals(self) {
            return nearest;
        }
        Self::from(value.floor())
    }

    fn equals(&self, other: &Self) -> bool {
        self.mantissa == other.mantissa && self.exponent == other.exponent
    }

    fn less_than(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() || (self.mantissa < 0.0) != (other.mantissa < 0.0) {
            return self.mantissa < other.mantissa;
        }
        if self.exponent == other.exponent {
            return self.mantissa < other.mantissa;
        }
        // Same sign: a larger exponent means further from zero.
        (self.exponent < other.exponent) == (self.mantissa > 0.0)
    }

    fn to_f64(&self) -> f64 {
        if self.exponent > 308 {
            return self.mantissa * f64::INFINITY;
        }
        if self.exponent < -340 {
            return 0.0 * self.mantissa;
        }
        scale(self.mantissa, self.exponent)
    }

    fn to_precision(&self, precision: usize) -> String {
        if !self.mantissa.is_finite() || PLAIN_EXPONENT_RANGE.contains(&self.exponent) {
            return to_precision(self.to_f64(), precision);
        }
        // Rounding can carry into the exponent: 9.996e400 at three digits is 1.00e+401.
        let sci = format!("{:.*e}", precision.max(1) - 1, self.mantissa);
        let (mantissa, carry) = match sci.split_once('e') {
            Some((m, e)) => (m, e.parse::<i64>().unwrap_or(0)),
            None => (sci.as_str(), 0),
        };
        let exponent = self.exponent + carry;
        let sign = if exponent >= 0 { "+" } else { "" };
        format!("{}e{}{}", mantissa, sign, exponent)
    }
}
