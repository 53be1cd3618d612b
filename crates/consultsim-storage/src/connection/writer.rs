//! Write transaction helper.

use consultsim_core::errors::StorageError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::to_storage_err;

/// Execute a write operation inside a BEGIN IMMEDIATE transaction.
///
/// The write lock is taken up front so a replace-all never interleaves with
/// another writer. Any error rolls back: the transaction is dropped uncommitted.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(format!("failed to begin immediate transaction: {e}")))?;

    let result = f(&tx)?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("failed to commit: {e}")))?;

    Ok(result)
}
