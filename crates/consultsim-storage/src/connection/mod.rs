//! Connection management for an existing entity store.

pub mod pragmas;
pub mod writer;

use std::path::{Path, PathBuf};

use consultsim_core::errors::StorageError;
use rusqlite::{Connection, OpenFlags};

use self::pragmas::apply_pragmas;
use crate::to_storage_err;

/// An open handle on the consulting database.
///
/// The store is produced by the simulator; this handle never creates it.
pub struct EntityStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl EntityStore {
    /// Open an existing database file read-write.
    /// A missing file is `StoreNotFound`, not an empty new database.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if !path.is_file() {
            return Err(StorageError::StoreNotFound {
                path: path.display().to_string(),
            });
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| to_storage_err(format!("open {}: {e}", path.display())))?;
        apply_pragmas(&conn)?;

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an already-open connection (in-memory databases in tests).
    pub fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        apply_pragmas(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// The underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Get the database file path (None for wrapped connections).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
