//! PRAGMA configuration applied to every store connection.
//!
//! The journal mode is left as the simulator configured it.

use consultsim_core::errors::StorageError;
use rusqlite::Connection;

use crate::to_storage_err;

/// Apply busy timeout and sync settings to a connection.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA busy_timeout = 5000;
        PRAGMA synchronous = NORMAL;
        ",
    )
    .map_err(to_storage_err)
}
