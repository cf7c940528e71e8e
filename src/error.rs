//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::utils::UnpackError;
use swaggerf_record::RecordError;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unpack error: {0}")]
    Unpack(#[from] UnpackError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// Unreadable or unparseable input document
    #[error("Document error: {path}: {message}")]
    Document { path: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
