use std::path::PathBuf;

use anyhow::Context;
use audit_catalog::write_export;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `audits export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = args
        .output
        .as_deref()
        .map_or_else(|| ctx.config.export.output_path(), PathBuf::from);
    let pretty = args.pretty || ctx.config.export.pretty;

    let export = ctx.catalog.export().context("failed to load catalog")?;
    if export.audits.is_empty() {
        tracing::warn!(
            inventory = %ctx.catalog.loader().path().display(),
            "exporting an empty catalog"
        );
    }

    let summary = write_export(&export, &path, pretty)
        .with_context(|| format!("failed to export catalog to {}", path.display()))?;

    if !flags.quiet {
        output(&summary, flags.format)?;
    }
    Ok(())
}
