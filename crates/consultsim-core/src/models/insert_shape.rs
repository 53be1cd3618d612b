//! Column layout of an output table, resolved once per pass.

use serde::{Deserialize, Serialize};

use crate::constants::{KEY_COLUMN, TAG_COLUMN};

/// Which optional columns an output table expects on insert.
///
/// Generated schemas vary: some declare an explicit numeric `id` and an
/// `event_type` tag, some only the key, some neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertShape {
    /// Only the payload columns.
    Bare,
    /// Payload plus a 1-based `id` assigned in write order.
    WithKey,
    /// Payload, `id`, and a constant `event_type` tag.
    WithKeyAndTag,
}

impl InsertShape {
    /// Resolve the shape from a table's column names.
    /// A tag column without a key column is written as `Bare`.
    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Self {
        let has = |name: &str| columns.iter().any(|c| c.as_ref() == name);
        match (has(KEY_COLUMN), has(TAG_COLUMN)) {
            (true, true) => Self::WithKeyAndTag,
            (true, false) => Self::WithKey,
            (false, _) => Self::Bare,
        }
    }
}
