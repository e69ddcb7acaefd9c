//! Numeric backends for polynomial arithmetic.
//!
//! Every polynomial, root and production computation is written against the
//! `NumberOps` trait rather than a concrete number type. A backend is a small
//! value (often zero-sized) whose associated `Num` is the number format it
//! operates on:
//!
//! - `NativeOps<F>`: built-in floats (`f64` by default, `f32` works too).
//! - `DecimalOps<D>`: any type implementing the `Decimal` contract, e.g. an
//!   arbitrary-precision decimal from another crate.
//! - `BigNumber`: a bundled mantissa/exponent type for quantities past `f64::MAX`,
//!   used through `DecimalOps<BigNumber>`.
//! - `rust_decimal::Decimal`: exact decimals, used through
//!   `DecimalOps<rust_decimal::Decimal>`.
pub mod big;
pub mod decimal;
pub mod exact;
pub mod format;
pub mod native;
#[cfg(test)]
pub(crate) mod testing;

use std::fmt;

pub use big::BigNumber;
pub use decimal::{Decimal, DecimalOps};
pub use native::NativeOps;

/// Basic operations for a number type. All polynomial operations are built from these.
///
/// `mul`, `div` and `pow` take a plain `f64` scalar (exponents, time values,
/// factorial weights), while the `_t` variants take two values of the backend type.
/// Backends that cannot cheaply convert an `f64` keep full precision through the
/// `_t` variants.
pub trait NumberOps: Clone {
    type Num: Clone + fmt::Debug;

    fn zero(&self) -> Self::Num;
    fn one(&self) -> Self::Num;

    fn equals(&self, a: &Self::Num, b: &Self::Num) -> bool;
    fn lt(&self, a: &Self::Num, b: &Self::Num) -> bool;

    fn add(&self, a: &Self::Num, b: &Self::Num) -> Self::Num;
    fn sub(&self, a: &Self::Num, b: &Self::Num) -> Self::Num;
    fn mul(&self, a: &Self::Num, b: f64) -> Self::Num;
    fn mul_t(&self, a: &Self::Num, b: &Self::Num) -> Self::Num;
    fn div(&self, a: &Self::Num, b: f64) -> Self::Num;
    fn div_t(&self, a: &Self::Num, b: &Self::Num) -> Self::Num;
    fn pow(&self, a: &Self::Num, b: f64) -> Self::Num;
    fn pow_t(&self, a: &Self::Num, b: &Self::Num) -> Self::Num;
    fn sqrt(&self, a: &Self::Num) -> Self::Num;
    fn cbrt(&self, a: &Self::Num) -> Self::Num;

    /// Best-effort conversion to `f64`. May return infinity or NaN when out of range.
    fn to_number(&self, a: &Self::Num) -> f64;

    /// Formats a coefficient of the given degree for display.
    ///
    /// Unit coefficients of non-constant terms render as `""` or `"-"`; everything
    /// else renders with a trailing space, e.g. `"3 "`.
    fn format(&self, c: &Self::Num, degree: usize) -> String;

    fn gte(&self, a: &Self::Num, b: &Self::Num) -> bool {
        !self.lt(a, b)
    }

    fn is_zero(&self, a: &Self::Num) -> bool {
        self.equals(a, &self.zero())
    }
}
