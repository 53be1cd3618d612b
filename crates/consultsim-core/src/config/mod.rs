//! Configuration system for consultsim.
//! TOML-based, 3-layer resolution: CLI > env > project > defaults.

pub mod consultsim_config;
pub mod progress_config;
pub mod store_config;
pub mod title_history_config;

pub use consultsim_config::{CliOverrides, ConsultsimConfig};
pub use progress_config::ProgressConfig;
pub use store_config::StoreConfig;
pub use title_history_config::TitleHistoryConfig;
