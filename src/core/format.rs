//! Result formatting for the display.
//!
//! Turns raw `f64` results into display strings: fixed notation rounded to
//! a fixed number of significant digits for ordinary magnitudes, exponential
//! notation for very large or very small ones.

use serde::{Deserialize, Serialize};

/// Sentinel shown in place of a value when a calculation fails.
pub const ERROR_DISPLAY: &str = "Error";

/// Parameters of the display formatter.
///
/// The defaults are 12 significant digits in fixed notation, 6 mantissa
/// decimals in exponential notation, and exponential notation above `1e10`
/// or below `1e-6` in magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Significant digits kept in fixed notation
    pub significant_digits: usize,
    /// Digits after the decimal point of the exponential mantissa
    pub exponential_digits: usize,
    /// Magnitudes strictly above this use exponential notation
    pub upper_threshold: f64,
    /// Non-zero magnitudes strictly below this use exponential notation
    pub lower_threshold: f64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            significant_digits: 12,
            exponential_digits: 6,
            upper_threshold: 1e10,
            lower_threshold: 1e-6,
        }
    }
}

impl FormatOptions {
    /// Format a raw result for the display.
    ///
    /// Rules are applied in order:
    /// 1. NaN or infinite values become `"Error"`.
    /// 2. Out-of-range magnitudes use exponential notation.
    /// 3. Everything else is rounded to the configured significant digits
    ///    and printed in its shortest form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus::core::FormatOptions;
    ///
    /// let options = FormatOptions::default();
    /// assert_eq!(options.format(0.1 + 0.2), "0.3");
    /// assert_eq!(options.format(123456789012.0), "1.234568e+11");
    /// assert_eq!(options.format(f64::NAN), "Error");
    /// ```
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return ERROR_DISPLAY.to_string();
        }

        let magnitude = value.abs();
        if magnitude > self.upper_threshold || (magnitude < self.lower_threshold && value != 0.0) {
            return format_exponential(value, self.exponential_digits);
        }

        format_plain(round_significant(value, self.significant_digits))
    }
}

/// Format with the default options.
pub fn format_result(value: f64) -> String {
    FormatOptions::default().format(value)
}

/// Round to `digits` significant digits.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let digits = digits.max(1);
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Exponential notation with a fixed number of mantissa decimals and an
/// explicitly signed exponent, e.g. `1.234568e+10` or `-5.000000e-7`.
pub fn format_exponential(value: f64, digits: usize) -> String {
    signed_exponent(format!("{:.*e}", digits, value))
}

/// Shortest decimal form of a number, as used for operands in history
/// expressions.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponential
/// notation. Negative zero prints as `"0"`.
pub fn format_plain(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return signed_exponent(format!("{:e}", value));
    }
    format!("{}", value)
}

/// Format with `precision` significant digits, switching to exponential
/// notation outside `[1e-4, 1e6)`.
///
/// Trailing zeros are kept, so `format_scientific(1.5, 4)` is `"1.500"`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }
    let precision = precision.max(1);
    let magnitude = value.abs();
    if magnitude >= 1e6 || (magnitude < 1e-4 && value != 0.0) {
        return format_exponential(value, precision);
    }
    to_precision(value, precision)
}

/// Fixed notation with `precision` significant digits, falling back to
/// exponential notation when the exponent does not fit.
fn to_precision(value: f64, precision: usize) -> String {
    let exponent = decimal_exponent(value, precision);
    if exponent < -6 || exponent >= precision as i32 {
        return format_exponential(value, precision - 1);
    }
    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    format!("{:.*}", decimals, value)
}

/// Base-10 exponent of `value` after rounding to `precision` digits.
fn decimal_exponent(value: f64, precision: usize) -> i32 {
    let rendered = format!("{:.*e}", precision - 1, value);
    rendered
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

fn signed_exponent(rendered: String) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => rendered,
    }
}
