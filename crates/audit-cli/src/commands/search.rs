use audit_core::{FilterCriteria, SearchHit};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::criteria::criteria_from_args;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output_listing;

#[derive(Debug, Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    criteria: &'a FilterCriteria,
    total: usize,
    hits: &'a [SearchHit],
}

/// Handle `audits search`.
pub fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = args.query.as_deref().unwrap_or("");
    let criteria = criteria_from_args(&args.filters)?;
    let limit = effective_limit(flags.limit, ctx.default_limit());

    let mut hits = ctx
        .catalog
        .search(query, (!criteria.is_empty()).then_some(&criteria))?;
    let total = hits.len();
    hits.truncate(limit);

    let response = SearchResponse {
        query,
        criteria: &criteria,
        total,
        hits: &hits,
    };
    output_listing(&response, &hits, flags.format)
}
