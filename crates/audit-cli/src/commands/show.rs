use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `audits show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .catalog
        .audit(&args.id)?
        .with_context(|| format!("audit '{}' not found", args.id))?;
    output(record, flags.format)
}
