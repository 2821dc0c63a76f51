//! Builder API for calculator sessions.
//!
//! The builder collects a store, a configuration and the host's system
//! preferences, validates the configuration, and restores persisted state
//! into a new [`Calculator`](crate::session::Calculator).

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
