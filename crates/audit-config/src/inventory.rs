//! Inventory source configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Fallback base location when neither `AUDITS_BASE_PATH` nor a config file sets one.
pub const DEFAULT_BASE_PATH: &str = ".";

/// File name of the inventory inside the base location.
pub const DEFAULT_FILE_NAME: &str = "AUDIT-INVENTORY.csv";

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InventoryConfig {
    /// Directory holding the inventory CSV.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Fail the load when any row has a data-quality issue instead of
    /// skipping the row.
    #[serde(default)]
    pub strict: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            file_name: default_file_name(),
            strict: false,
        }
    }
}

impl InventoryConfig {
    /// Full path to the inventory CSV.
    #[must_use]
    pub fn inventory_path(&self) -> PathBuf {
        PathBuf::from(&self.base_path).join(&self.file_name)
    }

    /// Reject values that cannot name a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the base path or file name is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "inventory.base_path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "inventory.file_name".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
