use serde::{Deserialize, Serialize};

use super::DeliverableId;

/// Actual date range of a deliverable, aggregated over its consultant mappings.
///
/// Dates stay as the raw store text; parsing happens per deliverable so that
/// one malformed value only drops that deliverable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverableRange {
    pub deliverable_id: DeliverableId,
    /// Earliest mapped start date.
    pub actual_start: Option<String>,
    /// Latest mapped end date.
    pub actual_end: Option<String>,
}
