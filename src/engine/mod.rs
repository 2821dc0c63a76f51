//! Calculation engine and its input tokens.
//!
//! The engine is an in-memory state machine: it never touches storage.
//! Operations that can complete a calculation return an [`Evaluation`] so
//! the surrounding session can persist the new history entry.

mod input;
mod machine;

pub use input::{
    parse_inputs, Action, BinaryFunction, Constant, Input, InputError, MemoryAction,
    UnaryFunction,
};
pub use machine::{CalculationEngine, Evaluation, PendingOp, PendingOperation};
