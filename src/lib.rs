//! Abacus: a two-operand calculator engine
//!
//! Abacus follows a "pure core, imperative shell" layout. The calculation
//! engine, formatter and math library are plain values and functions with
//! no I/O; persistence of history, the memory cell and theme settings is
//! kept at the edges behind the [`storage::KeyValueStore`] trait.
//!
//! # Core Concepts
//!
//! - **Engine**: the pending-operation state machine driven by inputs
//! - **Formatter**: turns raw results into display strings
//! - **History**: an immutable, capacity-bounded log of calculations
//! - **Session**: wires the engine, memory and theme to one store
//!
//! # Example
//!
//! ```rust
//! use abacus::core::Operator;
//! use abacus::engine::{Action, Input};
//! use abacus::session::Calculator;
//! use abacus::storage::InMemoryStore;
//!
//! let mut calc = Calculator::new(InMemoryStore::new());
//! for input in [
//!     Input::Digit('1'),
//!     Input::Operator(Operator::Divide),
//!     Input::Digit('0'),
//!     Input::Action(Action::Calculate),
//! ] {
//!     calc.press(input);
//! }
//! assert_eq!(calc.display(), "Error");
//!
//! calc.press(Input::Digit('4'));
//! assert_eq!(calc.display(), "4");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod math;
pub mod memory;
pub mod session;
pub mod storage;
pub mod theme;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use config::{CalculatorConfig, ConfigError};
pub use core::{format_result, CalcError, HistoryEntry, HistoryLog, Operator};
pub use engine::{CalculationEngine, Evaluation, Input};
pub use session::Calculator;
pub use storage::{FileStore, InMemoryStore, KeyValueStore};
pub use theme::{ThemeMode, ThemeState};
