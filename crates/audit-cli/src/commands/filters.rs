use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `audits filters`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.catalog.filter_options()?, flags.format)
}
