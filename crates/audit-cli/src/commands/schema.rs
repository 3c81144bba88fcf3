use audit_catalog::export_schema;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `audits schema`. Table output falls back to JSON.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&export_schema()?, format)
}
