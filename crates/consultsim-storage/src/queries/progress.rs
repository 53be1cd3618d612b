//! Replace-all writer and reader for Deliverable_Progress_Month.

use consultsim_core::constants::{DATE_FORMAT, PROGRESS_TABLE, PROGRESS_TAG};
use consultsim_core::errors::StorageError;
use consultsim_core::models::{DeliverableId, InsertShape, ProgressRecord};
use rusqlite::{params, Connection};

use super::title_history::parse_stored_date;
use crate::connection::writer::with_immediate_transaction;
use crate::to_storage_err;

/// Delete every progress row and insert `records` in order, atomically.
pub fn replace_all(
    conn: &Connection,
    shape: InsertShape,
    records: &[ProgressRecord],
) -> Result<usize, StorageError> {
    with_immediate_transaction(conn, |tx| {
        let deleted = tx
            .execute("DELETE FROM Deliverable_Progress_Month", [])
            .map_err(|e| to_storage_err(format!("clear {PROGRESS_TABLE}: {e}")))?;
        tracing::debug!(deleted, "cleared progress months");

        let sql = match shape {
            InsertShape::WithKeyAndTag => {
                "INSERT INTO Deliverable_Progress_Month \
                 (id, DeliverableID, Report_Month, PercentageComplete, event_type) \
                 VALUES (?1, ?2, ?3, ?4, ?5)"
            }
            InsertShape::WithKey => {
                "INSERT INTO Deliverable_Progress_Month \
                 (id, DeliverableID, Report_Month, PercentageComplete) \
                 VALUES (?1, ?2, ?3, ?4)"
            }
            InsertShape::Bare => {
                "INSERT INTO Deliverable_Progress_Month \
                 (DeliverableID, Report_Month, PercentageComplete) \
                 VALUES (?1, ?2, ?3)"
            }
        };
        let mut stmt = tx.prepare(sql).map_err(to_storage_err)?;

        for (idx, record) in records.iter().enumerate() {
            let key = idx as i64 + 1;
            let did = record.deliverable_id.0;
            let month = record.report_month.format(DATE_FORMAT).to_string();
            let pct = record.percentage_complete;
            let result = match shape {
                InsertShape::WithKeyAndTag => {
                    stmt.execute(params![key, did, month, pct, PROGRESS_TAG])
                }
                InsertShape::WithKey => stmt.execute(params![key, did, month, pct]),
                InsertShape::Bare => stmt.execute(params![did, month, pct]),
            };
            result.map_err(|e| {
                to_storage_err(format!("insert progress for deliverable {did}: {e}"))
            })?;
        }
        Ok(records.len())
    })
}

/// Read every progress row back in insertion order.
pub fn load_all(conn: &Connection) -> Result<Vec<ProgressRecord>, StorageError> {
    let mut stmt = conn
        .prepare(
            "SELECT DeliverableID, Report_Month, PercentageComplete
             FROM Deliverable_Progress_Month ORDER BY rowid",
        )
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })
        .map_err(to_storage_err)?;

    let mut records = Vec::new();
    for row in rows {
        let (did, month, pct) = row.map_err(to_storage_err)?;
        records.push(ProgressRecord {
            deliverable_id: DeliverableId(did),
            report_month: parse_stored_date(&month)?,
            percentage_complete: pct,
        });
    }
    Ok(records)
}
