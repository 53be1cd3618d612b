//! Entity store errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while reading from or writing to the entity store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Database not found at {path}")]
    StoreNotFound { path: String },

    #[error("{table} table not found")]
    TableMissing { table: String },
}

impl StorageError {
    /// True for the structural failures that abort a whole pass.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::StoreNotFound { .. } | Self::TableMissing { .. })
    }
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::StoreNotFound { .. } => error_code::STORE_NOT_FOUND,
            Self::TableMissing { .. } => error_code::TABLE_MISSING,
        }
    }
}
