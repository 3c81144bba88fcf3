use anyhow::Context;
use audit_core::NavCategory;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NavArgs;
use crate::context::AppContext;
use crate::output::output_listing;

/// Handle `audits nav`.
pub fn handle(args: &NavArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let categories: Vec<&NavCategory> = match args.category.as_deref() {
        Some(slug) => vec![
            ctx.catalog
                .category(slug)?
                .with_context(|| format!("category '{slug}' not found"))?,
        ],
        None => ctx.catalog.navigation()?.iter().collect(),
    };
    output_listing(&categories, &categories, flags.format)
}
