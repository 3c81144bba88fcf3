use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write the static JSON artifact (audits, navigation, stats, filter options).
    Export(ExportArgs),
    /// Free-text search, optionally narrowed by filters.
    Search(SearchArgs),
    /// Show one audit by identifier.
    Show(ShowArgs),
    /// Print the category/subcategory navigation tree.
    Nav(NavArgs),
    /// List the audits of a category or subcategory.
    Category(CategoryArgs),
    /// Aggregate counts over the inventory.
    Stats,
    /// Values available to filter on.
    Filters,
    /// Report inventory rows that could not be loaded.
    Validate(ValidateArgs),
    /// Dump the JSON schema of the export artifact.
    Schema,
    /// Serve the query interface as JSON over HTTP.
    Serve(ServeArgs),
}

/// Arguments for `audits export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Output file (defaults to export.output_path).
    #[arg(short, long)]
    pub output: Option<String>,
    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Filter criteria shared by listing commands.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub tier: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub subcategory: Option<String>,
    /// SDLC phase whose flag must be set.
    #[arg(long)]
    pub phase: Option<String>,
    /// Automation level whose flag must be set.
    #[arg(long)]
    pub automation: Option<String>,
    /// Extra criterion as KEY=VALUE, e.g. requires_source_code=true.
    #[arg(long = "where", value_name = "KEY=VALUE")]
    pub conditions: Vec<String>,
}

/// Arguments for `audits search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Search text; omit to list every audit.
    pub query: Option<String>,
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for `audits show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

/// Arguments for `audits nav`.
#[derive(Clone, Debug, Args)]
pub struct NavArgs {
    /// Only this category slug.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `audits category`.
#[derive(Clone, Debug, Args)]
pub struct CategoryArgs {
    pub slug: String,
    pub subcategory: Option<String>,
}

/// Arguments for `audits validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Exit non-zero when any row was skipped.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `audits serve`.
#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
}
