//! # consultsim-storage
//!
//! Access to the simulated consulting database: opening an existing store,
//! probing its schema, reading the seed entities, and replacing the contents
//! of the two generated tables inside one transaction each.

pub mod connection;
pub mod queries;
pub mod schema;

pub use connection::EntityStore;

use consultsim_core::errors::StorageError;

/// Wrap any SQLite-level failure into a `StorageError`.
pub(crate) fn to_storage_err(message: impl std::fmt::Display) -> StorageError {
    StorageError::SqliteError {
        message: message.to_string(),
    }
}
