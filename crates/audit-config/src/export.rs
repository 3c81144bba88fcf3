//! Export artifact configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_output_path() -> String {
    "static/data/audits.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Where `audits export` writes the artifact.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Pretty-print the artifact.
    #[serde(default)]
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            pretty: false,
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_path)
    }
}
