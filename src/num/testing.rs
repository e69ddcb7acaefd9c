//! Helpers for running one test table against every bundled backend.

use super::NumberOps;
use crate::poly::Polynomial;

/// A backend number for `n`, built through the backend's own `mul`.
pub fn num<O: NumberOps>(ops: &O, n: f64) -> O::Num {
    ops.mul(&ops.one(), n)
}

pub fn poly_in<O: NumberOps>(ops: &O, coeffs: &[f64]) -> Polynomial<O> {
    Polynomial::parse(coeffs.iter().map(|&c| num(ops, c)), ops.clone())
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance * expected.abs().max(1.0),
        "{} is not within {} of {}",
        actual,
        tolerance,
        expected
    );
}

/// Expands the given tests once per bundled backend, each copy in a module
/// named after its backend, with `ops()` returning that backend.
macro_rules! for_each_backend {
    ($($body:tt)*) => {
        mod native {
            use super::*;

            fn ops() -> $crate::num::NativeOps {
                $crate::num::NativeOps::new()
            }

            $($body)*
        }

        mod big_number {
            use super::*;

            fn ops() -> $crate::num::DecimalOps<$crate::num::BigNumber> {
                $crate::num::DecimalOps::new()
            }

            $($body)*
        }

        mod exact {
            use super::*;

            fn ops() -> $crate::num::DecimalOps<rust_decimal::Decimal> {
                $crate::num::DecimalOps::new()
            }

            $($body)*
        }
    };
}

pub(crate) use for_each_backend;
