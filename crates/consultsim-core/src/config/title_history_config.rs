//! Promotion-chain generation settings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ENTRY_CUTOFF, DEFAULT_MAX_TENURE_MONTHS, DEFAULT_MIN_TENURE_MONTHS,
    DEFAULT_PROMOTION_WEIGHTS, DEFAULT_SEED, DEFAULT_SIMULATION_END, DEFAULT_SIMULATION_START,
    DEFAULT_STILL_ACTIVE_PROBABILITY,
};

/// Configuration for title-history generation. Every field is optional;
/// `effective_*` accessors fall back to the compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TitleHistoryConfig {
    /// Seed for the random stream. Default: 42.
    pub seed: Option<u64>,
    /// Earliest entry month. Default: 2020-01-01.
    pub simulation_start: Option<NaiveDate>,
    /// Latest entry month. Default: 2025-01-01.
    pub entry_cutoff: Option<NaiveDate>,
    /// No end date lies past this month. Default: 2025-12-01.
    pub simulation_end: Option<NaiveDate>,
    /// Chance that the last title of a chain is still held. Default: 0.75.
    pub still_active_probability: Option<f64>,
    /// Shortest tenure in one title, in months. Default: 6.
    pub min_tenure_months: Option<u32>,
    /// Longest tenure in one title, in months. Default: 24.
    pub max_tenure_months: Option<u32>,
    /// Weights for 0, 1, and 2 promotions. Empty means the defaults.
    pub promotion_weights: Vec<f64>,
}

impl TitleHistoryConfig {
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn effective_simulation_start(&self) -> NaiveDate {
        self.simulation_start
            .unwrap_or_else(|| constant_date(DEFAULT_SIMULATION_START))
    }

    pub fn effective_entry_cutoff(&self) -> NaiveDate {
        self.entry_cutoff
            .unwrap_or_else(|| constant_date(DEFAULT_ENTRY_CUTOFF))
    }

    pub fn effective_simulation_end(&self) -> NaiveDate {
        self.simulation_end
            .unwrap_or_else(|| constant_date(DEFAULT_SIMULATION_END))
    }

    pub fn effective_still_active_probability(&self) -> f64 {
        self.still_active_probability
            .unwrap_or(DEFAULT_STILL_ACTIVE_PROBABILITY)
    }

    pub fn effective_min_tenure_months(&self) -> u32 {
        self.min_tenure_months.unwrap_or(DEFAULT_MIN_TENURE_MONTHS)
    }

    pub fn effective_max_tenure_months(&self) -> u32 {
        self.max_tenure_months.unwrap_or(DEFAULT_MAX_TENURE_MONTHS)
    }

    pub fn effective_promotion_weights(&self) -> Vec<f64> {
        if self.promotion_weights.is_empty() {
            DEFAULT_PROMOTION_WEIGHTS.to_vec()
        } else {
            self.promotion_weights.clone()
        }
    }
}

fn constant_date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
