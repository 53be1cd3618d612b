//! Error handling for consultsim.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod entity_skip;
pub mod error_code;
pub mod storage_error;
pub mod synth_error;

pub use config_error::ConfigError;
pub use entity_skip::EntitySkip;
pub use error_code::ErrorCode;
pub use storage_error::StorageError;
pub use synth_error::SynthError;
