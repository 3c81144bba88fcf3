use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Search(args) => commands::search::handle(&args, ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Nav(args) => commands::nav::handle(&args, ctx, flags),
        Commands::Category(args) => commands::category::handle(&args, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Filters => commands::filters::handle(ctx, flags),
        Commands::Validate(args) => commands::validate::handle(&args, ctx, flags),
        Commands::Serve(args) => commands::serve::handle(&args, ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
