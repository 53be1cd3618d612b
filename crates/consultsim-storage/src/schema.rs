//! Schema introspection on the entity store.

use consultsim_core::errors::StorageError;
use consultsim_core::models::InsertShape;
use rusqlite::{params, Connection, OptionalExtension};

use crate::to_storage_err;

/// Whether a table exists. SQLite identifiers are case-insensitive.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, StorageError> {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE",
        params![table],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
    .map_err(to_storage_err)
}

/// Fail with `TableMissing` unless `table` exists.
pub fn require_table(conn: &Connection, table: &str) -> Result<(), StorageError> {
    if table_exists(conn, table)? {
        Ok(())
    } else {
        Err(StorageError::TableMissing {
            table: table.to_string(),
        })
    }
}

/// Column names of `table`, in declaration order.
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![table], |row| row.get::<_, String>(0))
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// Resolve which optional key/tag columns an output table carries.
pub fn resolve_insert_shape(conn: &Connection, table: &str) -> Result<InsertShape, StorageError> {
    require_table(conn, table)?;
    let columns = table_columns(conn, table)?;
    let shape = InsertShape::from_columns(&columns);
    tracing::debug!(table, ?shape, "resolved insert shape");
    Ok(shape)
}

/// Row count of `table`.
pub fn count_rows(conn: &Connection, table: &str) -> Result<i64, StorageError> {
    conn.query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| row.get(0))
        .map_err(to_storage_err)
}
