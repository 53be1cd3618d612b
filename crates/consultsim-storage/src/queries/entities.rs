//! Reads of the seed entities: consultants, titles, deliverable ranges.

use consultsim_core::constants::{
    CONSULTANT_TABLE, DELIVERABLE_TABLE, MAPPING_TABLE, TITLE_TABLE,
};
use consultsim_core::errors::StorageError;
use consultsim_core::models::{ConsultantId, DeliverableId, DeliverableRange, TitleId};
use rusqlite::types::{Value, ValueRef};
use rusqlite::Connection;

use crate::schema::require_table;
use crate::to_storage_err;

/// All consultant ids ordered by key. Values are kept as stored.
pub fn consultant_ids(conn: &Connection) -> Result<Vec<ConsultantId>, StorageError> {
    require_table(conn, CONSULTANT_TABLE)?;
    let mut stmt = conn
        .prepare("SELECT ConsultantID FROM Consultant ORDER BY ConsultantID")
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| consultant_id(row.get_ref(0)?))
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// All title ids, ascending (junior to senior).
pub fn title_ids(conn: &Connection) -> Result<Vec<TitleId>, StorageError> {
    require_table(conn, TITLE_TABLE)?;
    let mut stmt = conn
        .prepare("SELECT TitleID FROM Title ORDER BY TitleID")
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| row.get::<_, i64>(0).map(TitleId))
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// Actual date range of every deliverable that has at least one consultant
/// mapping, ordered by deliverable id.
pub fn deliverable_ranges(conn: &Connection) -> Result<Vec<DeliverableRange>, StorageError> {
    require_table(conn, DELIVERABLE_TABLE)?;
    require_table(conn, MAPPING_TABLE)?;
    let mut stmt = conn
        .prepare(
            "SELECT d.DeliverableID,
                    MIN(cdm.start_date) AS actual_start,
                    MAX(cdm.end_date) AS actual_end
             FROM Deliverable d
             JOIN Consultant_Deliverable_Mapping cdm
                 ON d.DeliverableID = cdm.DeliverableID
             GROUP BY d.DeliverableID
             ORDER BY d.DeliverableID",
        )
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(DeliverableRange {
                deliverable_id: DeliverableId(row.get(0)?),
                actual_start: date_text(row.get_ref(1)?),
                actual_end: date_text(row.get_ref(2)?),
            })
        })
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// Render a date cell as text. Numbers keep their digits so the parser can
/// reject them per deliverable instead of failing the whole query.
fn date_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

/// Read a consultant key cell without assuming its type. Reals keep their
/// textual form; NULL and BLOB keys are rejected.
pub(crate) fn consultant_id(value: ValueRef<'_>) -> rusqlite::Result<ConsultantId> {
    match value {
        ValueRef::Integer(i) => Ok(ConsultantId::Integer(i)),
        ValueRef::Text(bytes) => Ok(ConsultantId::Text(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
        ValueRef::Real(f) => Ok(ConsultantId::Text(f.to_string())),
        other => Err(rusqlite::Error::InvalidColumnType(
            0,
            "ConsultantID".to_string(),
            other.data_type(),
        )),
    }
}

/// The SQL value a consultant key is written back as.
pub(crate) fn consultant_value(id: &ConsultantId) -> Value {
    match id {
        ConsultantId::Integer(i) => Value::Integer(*i),
        ConsultantId::Text(s) => Value::Text(s.clone()),
    }
}
