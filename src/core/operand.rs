//! The typed input buffer.

use super::format::ERROR_DISPLAY;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An operand as the user typed it.
///
/// The text is kept verbatim so that a trailing decimal point or trailing
/// zeros survive until evaluation. The numeric value is derived from the
/// longest numeric prefix of the text, so `"5("` evaluates to `5` and
/// `"Error"` evaluates to NaN.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operand;
///
/// let mut operand = Operand::zero();
/// operand.push_digit('1');
/// operand.push_digit('.');
/// assert_eq!(operand.text(), "1.");
/// assert_eq!(operand.value(), 1.0);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Operand {
    text: String,
}

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl Operand {
    /// The fresh buffer, `"0"`.
    pub fn zero() -> Self {
        Self::new("0")
    }

    /// The `"Error"` sentinel.
    pub fn error() -> Self {
        Self::new(ERROR_DISPLAY)
    }

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// An empty buffer, used when a fresh operand starts after a reset.
    pub(crate) fn empty() -> Self {
        Self::new("")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.text == ERROR_DISPLAY
    }

    /// Numeric value of the longest numeric prefix, or NaN if there is none.
    pub fn value(&self) -> f64 {
        parse_numeric_prefix(&self.text).unwrap_or(f64::NAN)
    }

    /// Append a digit or decimal point.
    ///
    /// Returns `false` when the character was rejected: a second decimal
    /// point, or anything that is not `0-9` or `.`. A digit typed onto a
    /// lone `"0"` replaces it, and a decimal point typed onto an empty
    /// buffer produces `"0."`.
    pub fn push_digit(&mut self, digit: char) -> bool {
        match digit {
            '.' => {
                if self.text.contains('.') {
                    return false;
                }
                if self.text.is_empty() {
                    self.text.push('0');
                }
                self.text.push('.');
                true
            }
            '0'..='9' => {
                if self.text == "0" {
                    self.text.clear();
                }
                self.text.push(digit);
                true
            }
            _ => false,
        }
    }

    /// Append an arbitrary character without validation.
    pub(crate) fn push_raw(&mut self, c: char) {
        self.text.push(c);
    }

    /// Remove the last character; an emptied buffer (or a lone sign)
    /// becomes `"0"`.
    pub fn backspace(&mut self) {
        if self.is_error() {
            *self = Self::zero();
            return;
        }
        self.text.pop();
        if self.text.is_empty() || self.text == "-" {
            *self = Self::zero();
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parse the longest prefix of `text` that forms a decimal number.
///
/// Mirrors lenient float parsing: leading whitespace is skipped, an
/// optional sign, digits, decimal point and exponent are consumed, and
/// anything after them is ignored.
pub fn parse_numeric_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let candidate: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        .collect();

    // Numeric text is ASCII, so every index is a char boundary
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
}
