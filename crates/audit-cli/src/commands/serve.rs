use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `audits serve`. Blocks until the process is stopped.
pub fn handle(args: &ServeArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut serve = ctx.config.serve.clone();
    if let Some(host) = &args.host {
        serve.host.clone_from(host);
    }
    if let Some(port) = args.port {
        serve.port = port;
    }
    serve.validate()?;

    let addr = serve.bind_addr();
    if !flags.quiet {
        eprintln!("serving audit catalog on http://{addr}");
    }
    crate::serve::run(&addr, &mut ctx.catalog)
}
