//! Progress-curve generation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProgressConfig {
    /// Report the month containing the actual end as 100% complete.
    /// Default: false (pure linear interpolation).
    pub complete_final_month: Option<bool>,
}

impl ProgressConfig {
    pub fn effective_complete_final_month(&self) -> bool {
        self.complete_final_month.unwrap_or(false)
    }
}
