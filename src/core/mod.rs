//! Core calculator types and logic.
//!
//! This module contains the pure core of the calculator:
//! - Operators and the typed operand buffer
//! - Result formatting for the display
//! - Immutable, bounded calculation history
//!
//! Nothing in this module touches persistence.

mod error;
mod format;
mod history;
mod operand;
mod operator;

pub use error::{checked, CalcError};
pub use format::{
    format_exponential, format_plain, format_result, format_scientific, round_significant,
    FormatOptions, ERROR_DISPLAY,
};
pub use history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use operand::{parse_numeric_prefix, Operand};
pub use operator::Operator;
