//! # consultsim-core
//!
//! Foundation crate for the consultsim post-processing stage.
//! Defines ids, generated records, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ConsultsimConfig;
pub use errors::{ConfigError, EntitySkip, StorageError, SynthError};
pub use models::{
    ConsultantId, DeliverableId, DeliverableRange, InsertShape, ProgressRecord, TitleHistoryRecord,
    TitleId,
};
