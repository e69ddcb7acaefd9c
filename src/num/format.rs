//! Coefficient formatting shared by the backends.

use num_traits::Float;
use std::fmt;
use std::ops::Range;

/// Significant digits used for small non-integer coefficients.
pub const DEFAULT_PRECISION: usize = 3;

/// Coefficients with a magnitude below this are rendered in short form.
pub const SHORT_FORM_LIMIT: f64 = 100.0;

/// Magnitudes printed as plain decimals by `to_shortest`. Anything else
/// non-zero prints in exponential notation.
pub const PLAIN_MAGNITUDES: Range<f64> = 1e-6..1e21;

/// Renders `value` with `precision` significant digits.
///
/// Fixed notation is used unless the decimal exponent is below -6 or at least
/// `precision`, in which case exponential notation is used (`1.23e-7`, `1.23e+5`).
pub fn to_precision(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", precision - 1, 0.0);
    }

    // Round first: 99.96 at three digits becomes 1.00e2 and must print as "100".
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -6 || exponent >= precision as i32 {
        let sign = if exponent >= 0 { "+" } else { "" };
        return format!("{}e{}{}", mantissa, sign, exponent);
    }

    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    format!("{:.*}", decimals, value)
}

/// Renders `value` with the fewest digits that read back to it.
///
/// Magnitudes in `PLAIN_MAGNITUDES` print as plain decimals, others as
/// `1.5e+25` or `1e-7`. Negative zero prints as `0`.
pub fn to_shortest<F: Float + fmt::Display + fmt::LowerExp>(value: F) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let magnitude = value.abs().to_f64().unwrap_or(f64::NAN);
    if !magnitude.is_finite() || PLAIN_MAGNITUDES.contains(&magnitude) {
        return value.to_string();
    }
    let sci = format!("{:e}", value);
    match sci.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => sci,
    }
}
