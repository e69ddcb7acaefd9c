//! Finds the roots of production polynomials.
//!
//! Everything here works on the `PolynomialLike` contract rather than on
//! `Polynomial` itself, so any coefficient container over a `NumberOps` backend
//! can be solved.
pub mod bisect;
pub mod closed_form;

use crate::num::NumberOps;

pub use bisect::{bisect, find_root_bisect, find_root_bisect_max, is_root_bisectable, BisectOptions};
pub use closed_form::find_roots_quick;

/// The number type of a polynomial's backend.
pub type NumOf<P> = <<P as PolynomialLike>::Ops as NumberOps>::Num;

/// What the root finders need from a polynomial.
pub trait PolynomialLike {
    type Ops: NumberOps;

    fn ops(&self) -> &Self::Ops;

    /// Coefficients, constant term first, without trailing zeros.
    fn coeffs(&self) -> &[NumOf<Self>];

    fn constant_term(&self) -> NumOf<Self>;

    fn evaluate(&self, t: f64) -> NumOf<Self>;
}
