//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing persisted values
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
