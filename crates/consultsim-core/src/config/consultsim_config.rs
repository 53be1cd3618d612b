//! Top-level consultsim configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ProgressConfig, StoreConfig, TitleHistoryConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CONSULTING_DB_PATH`, `CONSULTSIM_*`)
/// 3. Project config (`consultsim.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConsultsimConfig {
    pub store: StoreConfig,
    pub title_history: TitleHistoryConfig,
    pub progress: ProgressConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_path: Option<String>,
    pub seed: Option<u64>,
    pub complete_final_month: Option<bool>,
}

impl ConsultsimConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConsultsimConfig) -> Result<(), ConfigError> {
        let th = &config.title_history;

        let start = th.effective_simulation_start();
        let cutoff = th.effective_entry_cutoff();
        let end = th.effective_simulation_end();
        if start > cutoff {
            return Err(ConfigError::ValidationFailed {
                field: "title_history.entry_cutoff".to_string(),
                message: format!("must not precede simulation_start ({start})"),
            });
        }
        if cutoff > end {
            return Err(ConfigError::ValidationFailed {
                field: "title_history.simulation_end".to_string(),
                message: format!("must not precede entry_cutoff ({cutoff})"),
            });
        }

        let p = th.effective_still_active_probability();
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ValidationFailed {
                field: "title_history.still_active_probability".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }

        if th.effective_min_tenure_months() > th.effective_max_tenure_months() {
            return Err(ConfigError::ValidationFailed {
                field: "title_history.max_tenure_months".to_string(),
                message: "must be at least min_tenure_months".to_string(),
            });
        }

        if !th.promotion_weights.is_empty() {
            if th.promotion_weights.len() != 3 {
                return Err(ConfigError::ValidationFailed {
                    field: "title_history.promotion_weights".to_string(),
                    message: "must list exactly 3 weights (0, 1, 2 promotions)".to_string(),
                });
            }
            let valid = th
                .promotion_weights
                .iter()
                .all(|w| w.is_finite() && *w >= 0.0);
            let total: f64 = th.promotion_weights.iter().sum();
            if !valid || total <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "title_history.promotion_weights".to_string(),
                    message: "must be non-negative with a positive sum".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ConsultsimConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ConsultsimConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut ConsultsimConfig, other: &ConsultsimConfig) {
        if other.store.db_path.is_some() {
            base.store.db_path = other.store.db_path.clone();
        }

        let (b, o) = (&mut base.title_history, &other.title_history);
        if o.seed.is_some() {
            b.seed = o.seed;
        }
        if o.simulation_start.is_some() {
            b.simulation_start = o.simulation_start;
        }
        if o.entry_cutoff.is_some() {
            b.entry_cutoff = o.entry_cutoff;
        }
        if o.simulation_end.is_some() {
            b.simulation_end = o.simulation_end;
        }
        if o.still_active_probability.is_some() {
            b.still_active_probability = o.still_active_probability;
        }
        if o.min_tenure_months.is_some() {
            b.min_tenure_months = o.min_tenure_months;
        }
        if o.max_tenure_months.is_some() {
            b.max_tenure_months = o.max_tenure_months;
        }
        if !o.promotion_weights.is_empty() {
            b.promotion_weights = o.promotion_weights.clone();
        }

        if other.progress.complete_final_month.is_some() {
            base.progress.complete_final_month = other.progress.complete_final_month;
        }
    }

    /// Apply environment variable overrides.
    /// `CONSULTING_DB_PATH` is shared with the simulator that produces the database.
    fn apply_env_overrides(config: &mut ConsultsimConfig) {
        if let Ok(val) = std::env::var("CONSULTING_DB_PATH") {
            if !val.is_empty() {
                config.store.db_path = Some(val);
            }
        }
        if let Ok(val) = std::env::var("CONSULTSIM_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.title_history.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSULTSIM_COMPLETE_FINAL_MONTH") {
            if let Ok(v) = val.parse::<bool>() {
                config.progress.complete_final_month = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ConsultsimConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.db_path {
            config.store.db_path = Some(v.clone());
        }
        if let Some(v) = cli.seed {
            config.title_history.seed = Some(v);
        }
        if let Some(v) = cli.complete_final_month {
            config.progress.complete_final_month = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
