//! Run summaries reported after each generation pass.

use std::collections::BTreeMap;
use std::fmt;

use consultsim_core::errors::EntitySkip;
use serde::Serialize;

/// Which table a pass populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    TitleHistory,
    Progress,
}

impl PassKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TitleHistory => "Title history",
            Self::Progress => "Progress month",
        }
    }
}

/// Whether a pass wrote anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Inserted,
    /// No eligible entities; the target table was left untouched.
    NothingToDo,
}

/// Result of one successful pass.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub kind: PassKind,
    pub outcome: RunOutcome,
    /// Entities considered (consultants or deliverables).
    pub entities: usize,
    pub records_inserted: usize,
    /// Histogram: records per entity -> number of entities.
    pub records_per_entity: BTreeMap<usize, usize>,
    pub skipped: Vec<EntitySkip>,
    /// Seed used, for title-history passes.
    pub seed: Option<u64>,
    pub ladder_synthetic: bool,
    pub duration_ms: u64,
}

impl RunSummary {
    pub fn nothing_to_do(kind: PassKind) -> Self {
        Self {
            kind,
            outcome: RunOutcome::NothingToDo,
            entities: 0,
            records_inserted: 0,
            records_per_entity: BTreeMap::new(),
            skipped: Vec::new(),
            seed: None,
            ladder_synthetic: false,
            duration_ms: 0,
        }
    }

    pub fn inserted(kind: PassKind, entities: usize) -> Self {
        Self {
            outcome: RunOutcome::Inserted,
            entities,
            ..Self::nothing_to_do(kind)
        }
    }

    /// Record how many rows one entity produced.
    pub fn record_entity(&mut self, records: usize) {
        *self.records_per_entity.entry(records).or_insert(0) += 1;
    }

    /// Mean records over every entity considered, skipped ones included.
    pub fn average_per_entity(&self) -> f64 {
        if self.entities == 0 {
            return 0.0;
        }
        self.records_inserted as f64 / self.entities as f64
    }

    /// Status line matching the invocation contract.
    pub fn status_line(&self) -> String {
        match self.outcome {
            RunOutcome::NothingToDo => "No records generated.".to_string(),
            RunOutcome::Inserted if self.records_inserted == 0 => {
                "No records generated.".to_string()
            }
            RunOutcome::Inserted => format!(
                "{} generation complete. {} records inserted.",
                self.kind.label(),
                self.records_inserted
            ),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.outcome) {
            (PassKind::TitleHistory, RunOutcome::NothingToDo) => {
                write!(f, "No consultants found in database.")
            }
            (PassKind::Progress, RunOutcome::NothingToDo) => {
                write!(f, "No deliverables with consultant mappings found.")
            }
            (PassKind::TitleHistory, RunOutcome::Inserted) => {
                writeln!(
                    f,
                    "Generated {} title history records for {} consultants.",
                    self.records_inserted, self.entities
                )?;
                writeln!(
                    f,
                    "  Average records per consultant: {:.1}",
                    self.average_per_entity()
                )?;
                let dist = self
                    .records_per_entity
                    .iter()
                    .map(|(len, n)| format!("{len}: {n}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "  Distribution of rows per consultant: {{{dist}}}")?;
                if self.ladder_synthetic {
                    write!(f, "\n  No titles in store; used synthetic titles 1-6.")?;
                }
                self.write_skips(f)
            }
            (PassKind::Progress, RunOutcome::Inserted) => {
                writeln!(
                    f,
                    "Generated {} progress month records for {} deliverables.",
                    self.records_inserted, self.entities
                )?;
                write!(
                    f,
                    "  Average months per deliverable: {:.1}",
                    self.average_per_entity()
                )?;
                self.write_skips(f)
            }
        }
    }
}

impl RunSummary {
    fn write_skips(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.skipped.is_empty() {
            return Ok(());
        }
        write!(f, "\n  Skipped {}:", self.skipped.len())?;
        for skip in &self.skipped {
            write!(f, "\n    {skip}")?;
        }
        Ok(())
    }
}
