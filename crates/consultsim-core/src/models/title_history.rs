use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ConsultantId, TitleId};

/// One title held by a consultant over a month-aligned interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleHistoryRecord {
    pub consultant_id: ConsultantId,
    pub title_id: TitleId,
    /// Always the first day of a month.
    pub start_date: NaiveDate,
    /// First day of a month, or `None` while the title is still held.
    pub end_date: Option<NaiveDate>,
    /// Rounded to 2 decimals.
    pub salary: f64,
}
