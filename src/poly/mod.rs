//! Polynomials over a pluggable numeric backend.
//!
//! A `Polynomial` is a coefficient list where index = degree:
//!
//! ```text
//! f(t) = c[0] + c[1] * t + c[2] * t^2 + ...
//! ```
pub mod polynomial;

pub use polynomial::{NativePolynomial, Polynomial, DEFAULT_ROOT_TOLERANCE};
