//! Arithmetic operators for the two-operand engine.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four basic arithmetic operators.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
///
/// let op: Operator = "×".parse().unwrap();
/// assert_eq!(op, Operator::Multiply);
/// assert_eq!(op.apply(6.0, 7.0), Ok(42.0));
/// assert_eq!(Operator::Subtract.symbol(), "−");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Display symbol used in pending labels and history expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by exactly zero is reported as [`CalcError::DivisionByZero`]
    /// rather than producing an infinity. Other non-finite results are
    /// returned as-is; the caller decides how to treat them.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operator {
    type Err = ();

    /// Accepts both the ASCII keyboard forms and the display symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "×" | "x" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            _ => Err(()),
        }
    }
}
