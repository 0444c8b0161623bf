mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let watch_flag = matches!(cli.command, Some(Commands::Watch)).then_some(true);
    let result = Context::new(
        cli.config.as_deref(),
        cli.settings.overrides(watch_flag),
        cli.verbose,
    )
    .and_then(|ctx| match cli.command {
        Some(Commands::Build { json }) => commands::build::run(&ctx, json),
        Some(Commands::Watch) => commands::watch::run(&ctx),
        None if ctx.config.watch => commands::watch::run(&ctx),
        None => commands::build::run(&ctx, false),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
