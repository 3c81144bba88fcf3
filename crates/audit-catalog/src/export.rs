//! Build-time export: the single JSON artifact the presentation layer loads.

use std::path::{Path, PathBuf};

use audit_core::{CatalogExport, InventoryRecord, NavCategory};
use schemars::schema_for;
use serde::Serialize;

use crate::error::CatalogError;
use crate::navigation::build_navigation;
use crate::stats::{compute_stats, filter_options};

/// What [`write_export`] produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub audits: usize,
    pub categories: usize,
    pub active: usize,
    pub planned: usize,
    pub bytes: usize,
}

/// Assemble the export artifact from a record set.
#[must_use]
pub fn build_export(records: &[InventoryRecord]) -> CatalogExport {
    export_with_navigation(records, build_navigation(records))
}

/// Assemble the export artifact around an already built navigation tree.
pub(crate) fn export_with_navigation(
    records: &[InventoryRecord],
    navigation: Vec<NavCategory>,
) -> CatalogExport {
    CatalogExport {
        audits: records.to_vec(),
        navigation,
        stats: compute_stats(records),
        filter_options: filter_options(records),
    }
}

/// Serialize `export` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`CatalogError::Serialize`] if serialization fails and
/// [`CatalogError::Write`] if the file or its directory cannot be written.
pub fn write_export(
    export: &CatalogExport,
    path: &Path,
    pretty: bool,
) -> Result<ExportSummary, CatalogError> {
    let body = if pretty {
        serde_json::to_string_pretty(export)?
    } else {
        serde_json::to_string(export)?
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CatalogError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, &body).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let summary = ExportSummary {
        path: path.to_path_buf(),
        audits: export.audits.len(),
        categories: export.navigation.len(),
        active: export.stats.active,
        planned: export.stats.planned,
        bytes: body.len(),
    };
    tracing::info!(
        path = %path.display(),
        audits = summary.audits,
        categories = summary.categories,
        active = summary.active,
        planned = summary.planned,
        "wrote export"
    );
    Ok(summary)
}

/// JSON Schema of [`CatalogExport`].
///
/// # Errors
///
/// Returns [`CatalogError::Serialize`] if the schema cannot be converted to JSON.
pub fn export_schema() -> Result<serde_json::Value, CatalogError> {
    Ok(serde_json::to_value(schema_for!(CatalogExport))?)
}
