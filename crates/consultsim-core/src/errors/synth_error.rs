//! Generation pass errors.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, StorageError};

/// Errors that abort a generation pass.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid {what} distribution: {message}")]
    InvalidDistribution { what: String, message: String },
}

impl ErrorCode for SynthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::InvalidDistribution { .. } => error_code::INVALID_DISTRIBUTION,
        }
    }
}
