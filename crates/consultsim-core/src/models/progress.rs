use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DeliverableId;

/// Completion of a deliverable as of the first day of a report month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub deliverable_id: DeliverableId,
    pub report_month: NaiveDate,
    /// 0.0 to 100.0, rounded to 2 decimals.
    pub percentage_complete: f64,
}
