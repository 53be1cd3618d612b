//! Replace-all writer and reader for Consultant_Title_History.

use chrono::NaiveDate;
use consultsim_core::constants::{DATE_FORMAT, TITLE_HISTORY_TABLE, TITLE_HISTORY_TAG};
use consultsim_core::errors::StorageError;
use consultsim_core::models::{InsertShape, TitleHistoryRecord, TitleId};
use rusqlite::{params, Connection};

use super::entities::{consultant_id, consultant_value};
use crate::connection::writer::with_immediate_transaction;
use crate::to_storage_err;

/// Delete every title-history row and insert `records` in order, atomically.
/// Keys, when the table has them, are 1-based in write order.
pub fn replace_all(
    conn: &Connection,
    shape: InsertShape,
    records: &[TitleHistoryRecord],
) -> Result<usize, StorageError> {
    with_immediate_transaction(conn, |tx| {
        let deleted = tx
            .execute("DELETE FROM Consultant_Title_History", [])
            .map_err(|e| to_storage_err(format!("clear {TITLE_HISTORY_TABLE}: {e}")))?;
        tracing::debug!(deleted, "cleared title history");

        let sql = match shape {
            InsertShape::WithKeyAndTag => {
                "INSERT INTO Consultant_Title_History \
                 (id, ConsultantID, TitleID, StartDate, EndDate, Salary, event_type) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
            }
            InsertShape::WithKey => {
                "INSERT INTO Consultant_Title_History \
                 (id, ConsultantID, TitleID, StartDate, EndDate, Salary) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
            }
            InsertShape::Bare => {
                "INSERT INTO Consultant_Title_History \
                 (ConsultantID, TitleID, StartDate, EndDate, Salary) \
                 VALUES (?1, ?2, ?3, ?4, ?5)"
            }
        };
        let mut stmt = tx.prepare(sql).map_err(to_storage_err)?;

        for (idx, record) in records.iter().enumerate() {
            let key = idx as i64 + 1;
            let start = record.start_date.format(DATE_FORMAT).to_string();
            let end = record
                .end_date
                .map(|d| d.format(DATE_FORMAT).to_string());
            let cid = consultant_value(&record.consultant_id);
            let tid = record.title_id.0;
            let result = match shape {
                InsertShape::WithKeyAndTag => stmt.execute(params![
                    key,
                    cid,
                    tid,
                    start,
                    end,
                    record.salary,
                    TITLE_HISTORY_TAG
                ]),
                InsertShape::WithKey => {
                    stmt.execute(params![key, cid, tid, start, end, record.salary])
                }
                InsertShape::Bare => stmt.execute(params![cid, tid, start, end, record.salary]),
            };
            result.map_err(|e| {
                to_storage_err(format!(
                    "insert title history for consultant {}: {e}",
                    record.consultant_id
                ))
            })?;
        }
        Ok(records.len())
    })
}

/// Read every title-history row back in insertion order.
pub fn load_all(conn: &Connection) -> Result<Vec<TitleHistoryRecord>, StorageError> {
    let mut stmt = conn
        .prepare(
            "SELECT ConsultantID, TitleID, StartDate, EndDate, Salary
             FROM Consultant_Title_History ORDER BY rowid",
        )
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                consultant_id(row.get_ref(0)?)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })
        .map_err(to_storage_err)?;

    let mut records = Vec::new();
    for row in rows {
        let (cid, tid, start, end, salary) = row.map_err(to_storage_err)?;
        records.push(TitleHistoryRecord {
            consultant_id: cid,
            title_id: TitleId(tid),
            start_date: parse_stored_date(&start)?,
            end_date: end.as_deref().map(parse_stored_date).transpose()?,
            salary,
        });
    }
    Ok(records)
}

pub(crate) fn parse_stored_date(text: &str) -> Result<NaiveDate, StorageError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| to_storage_err(format!("stored date {text:?}: {e}")))
}
