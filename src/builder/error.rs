//! Errors raised while assembling a calculator session.

use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a [`Calculator`](crate::session::Calculator).
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Store not specified. Call .store(store) before .build()")]
    MissingStore,

    #[error("Invalid configuration: {0:?}")]
    InvalidConfig(Vec<ConfigViolation>),
}
