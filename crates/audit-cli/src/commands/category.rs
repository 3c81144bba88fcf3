use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CategoryArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output_listing;

/// Handle `audits category`.
pub fn handle(args: &CategoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(category) = ctx.catalog.category(&args.slug)? else {
        bail!("category '{}' not found", args.slug);
    };

    let mut records = match args.subcategory.as_deref() {
        Some(subcategory) => {
            if category.subcategory(subcategory).is_none() {
                bail!("subcategory '{subcategory}' not found in '{}'", args.slug);
            }
            ctx.catalog.audits_by_subcategory(&args.slug, subcategory)?
        }
        None => ctx.catalog.audits_by_category(&args.slug)?,
    };
    records.truncate(effective_limit(flags.limit, ctx.default_limit()));

    output_listing(&records, &records, flags.format)
}
