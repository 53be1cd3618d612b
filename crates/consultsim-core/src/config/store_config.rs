//! Entity store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DB_PATH;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite database. Default: `output/consulting.db`.
    pub db_path: Option<String>,
}

impl StoreConfig {
    pub fn effective_db_path(&self) -> PathBuf {
        PathBuf::from(self.db_path.as_deref().unwrap_or(DEFAULT_DB_PATH))
    }
}
