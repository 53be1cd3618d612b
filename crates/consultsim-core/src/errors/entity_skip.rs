//! Non-fatal, per-entity failures.

use serde::Serialize;

/// Why a single consultant or deliverable produced no records.
/// Collected into the run summary; never aborts a pass.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
pub enum EntitySkip {
    #[error("{entity}: missing {field}")]
    MissingDate { entity: String, field: &'static str },

    #[error("{entity}: unparseable {field} {value:?}")]
    UnparseableDate {
        entity: String,
        field: &'static str,
        value: String,
    },
}
