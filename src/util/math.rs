//! math.rs

use std::ops::Range;

/// Multiplies every number together. The empty product is 1.
pub fn product<I: IntoIterator<Item = f64>>(ns: I) -> f64 {
    ns.into_iter().fold(1.0, |a, b| a * b)
}

/// The integers in `[start, end)`. Empty when `end <= start`.
pub fn range(start: u32, end: u32) -> Range<u32> {
    start..end.max(start)
}

/// `n!`, as the product of `1..=n`.
///
/// Returned as `f64`, which holds factorials up to `170!`.
pub fn factorial(n: u32) -> f64 {
    product(range(1, n.saturating_add(1)).map(f64::from))
}
