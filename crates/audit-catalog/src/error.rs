//! Catalog error types.

use std::path::PathBuf;

use audit_core::DataIssue;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The inventory exists but could not be read.
    #[error("failed to read inventory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer rejected the input (for example invalid UTF-8).
    #[error("failed to parse inventory: {0}")]
    Csv(#[from] csv::Error),

    /// Strict loading found rows that could not become records.
    #[error("inventory has {} invalid row(s); first: {}", .issues.len(), first_issue(.issues))]
    InvalidData { issues: Vec<DataIssue> },

    /// The export artifact could not be serialized.
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The export artifact could not be written.
    #[error("failed to write export {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn first_issue(issues: &[DataIssue]) -> String {
    issues
        .first()
        .map_or_else(|| String::from("-"), ToString::to_string)
}
