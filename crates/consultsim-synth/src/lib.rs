//! # consultsim-synth
//!
//! Post-processing passes over the simulated consulting database:
//! promotion-chain title histories per consultant, and monthly progress
//! curves per deliverable. Each pass reads the seed entities, generates
//! records in memory, and replaces its target table in one transaction.

pub mod calendar;
pub mod ladder;
pub mod pipeline;
pub mod progress;
pub mod summary;
pub mod title_history;

pub use ladder::TitleLadder;
pub use pipeline::{
    populate_progress_months, populate_title_history, run_progress_months, run_title_history,
    status_code,
};
pub use progress::ProgressCurveGenerator;
pub use summary::{PassKind, RunOutcome, RunSummary};
pub use title_history::{ChainParams, PromotionChainGenerator};
