use anyhow::bail;
use audit_catalog::InventoryLoader;
use audit_core::DataIssue;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::context::AppContext;
use crate::output::output_listing;

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    path: String,
    source_found: bool,
    records: usize,
    issues: &'a [DataIssue],
}

/// Handle `audits validate`.
///
/// Always loads leniently so every issue is listed; `--strict` (or
/// `inventory.strict`) then turns any issue into a failure.
pub fn handle(args: &ValidateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let loader = InventoryLoader::from_config(&ctx.config.inventory).strict(false);
    let inventory = loader.load()?;

    let report = ValidationReport {
        path: loader.path().display().to_string(),
        source_found: inventory.source_found,
        records: inventory.records.len(),
        issues: &inventory.issues,
    };
    output_listing(&report, &inventory.issues, flags.format)?;

    if !inventory.source_found {
        bail!("inventory file {} not found", report.path);
    }
    let strict = args.strict || ctx.config.inventory.strict;
    if strict && !inventory.issues.is_empty() {
        bail!(
            "{} invalid row(s) in {}",
            inventory.issues.len(),
            report.path
        );
    }
    Ok(())
}
