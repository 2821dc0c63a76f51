//! Calculation error types.

use thiserror::Error;

/// Errors that can occur while computing a value.
///
/// None of these escape the engine: they are converted into the `"Error"`
/// display sentinel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    /// Division where the divisor is exactly zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Invalid argument to a math function
    #[error("{function}: {reason}")]
    Domain {
        function: &'static str,
        reason: String,
    },

    /// Result is NaN or infinite
    #[error("Result is not a finite number")]
    NonFinite,

    /// Integer result does not fit in 64 bits
    #[error("{function}: result overflows")]
    Overflow { function: &'static str },
}

impl CalcError {
    pub(crate) fn domain(function: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            function,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinite values.
///
/// # Example
///
/// ```rust
/// use abacus::core::{checked, CalcError};
///
/// assert_eq!(checked(2.5), Ok(2.5));
/// assert_eq!(checked(f64::NAN), Err(CalcError::NonFinite));
/// assert_eq!(checked(f64::INFINITY), Err(CalcError::NonFinite));
/// ```
pub fn checked(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite)
    }
}
