//! Progress-curve generator.
//!
//! One record per calendar month across a deliverable's actual range, with
//! completion interpolated linearly over elapsed days.

use chrono::{NaiveDate, NaiveDateTime};
use consultsim_core::config::ProgressConfig;
use consultsim_core::constants::MAX_PERCENTAGE;
use consultsim_core::errors::EntitySkip;
use consultsim_core::models::{DeliverableRange, ProgressRecord};

use crate::calendar::{month_steps, parse_store_timestamp, round2, whole_days};

/// Completion at `step` for a deliverable that started at `start` and runs
/// `total_days`. Steps before the start report 0.
pub fn percentage_complete(step: NaiveDate, start: NaiveDateTime, total_days: i64) -> f64 {
    let elapsed = (step - start.date()).num_days().max(0);
    let total = total_days.max(1);
    round2(100.0 * elapsed as f64 / total as f64).min(MAX_PERCENTAGE)
}

#[derive(Debug, Clone, Default)]
pub struct ProgressCurveGenerator {
    complete_final_month: bool,
}

impl ProgressCurveGenerator {
    pub fn new(complete_final_month: bool) -> Self {
        Self {
            complete_final_month,
        }
    }

    pub fn from_config(config: &ProgressConfig) -> Self {
        Self::new(config.effective_complete_final_month())
    }

    /// Generate the monthly curve for one deliverable.
    ///
    /// A missing or unparseable boundary date skips the deliverable whole.
    /// An end month before the start month yields no records.
    pub fn generate(&self, range: &DeliverableRange) -> Result<Vec<ProgressRecord>, EntitySkip> {
        let entity = format!("deliverable {}", range.deliverable_id);
        let start = parse_boundary(&entity, "actual start", range.actual_start.as_deref())?;
        let end = parse_boundary(&entity, "actual end", range.actual_end.as_deref())?;

        let total_days = match whole_days(start, end) {
            days if days <= 0 => 1,
            days => days,
        };

        let mut records: Vec<ProgressRecord> = month_steps(start.date(), end.date())
            .map(|month| ProgressRecord {
                deliverable_id: range.deliverable_id,
                report_month: month,
                percentage_complete: percentage_complete(month, start, total_days),
            })
            .collect();

        if self.complete_final_month {
            if let Some(last) = records.last_mut() {
                last.percentage_complete = MAX_PERCENTAGE;
            }
        }

        Ok(records)
    }
}

fn parse_boundary(
    entity: &str,
    field: &'static str,
    raw: Option<&str>,
) -> Result<NaiveDateTime, EntitySkip> {
    let raw = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            return Err(EntitySkip::MissingDate {
                entity: entity.to_string(),
                field,
            })
        }
    };
    parse_store_timestamp(raw).ok_or_else(|| EntitySkip::UnparseableDate {
        entity: entity.to_string(),
        field,
        value: raw.to_string(),
    })
}
