//! Watch command - rebuild whenever a source file changes

use crate::commands::build::compile_all;
use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use htmlify_core::config::consts::WATCH_DEBOUNCE_MS;
use htmlify_watch::{WatchOptions, watch};
use std::time::Duration;

/// Build once, then rebuild on every change until interrupted
///
/// Failed documents are reported but never stop the watcher.
pub fn run(ctx: &Context) -> Result<()> {
    println!("{} HTMLify-ing...", "→".cyan());
    rebuild(ctx);

    let options = WatchOptions {
        root: ctx.config.target_dir.clone(),
        extension: ctx.config.input_extension.clone(),
        debounce: Duration::from_millis(WATCH_DEBOUNCE_MS),
        ignore: vec![ctx.config.out_dir.clone()],
    };

    println!(
        "{} Watching '{}' for changes (Ctrl+C to stop)",
        "→".cyan(),
        options.root.display()
    );

    watch(&options, |changed| {
        if ctx.verbose {
            for path in changed {
                println!("{} Changed {}", "→".cyan(), path.display());
            }
        }
        println!("\n{} HTMLify-ing...", "→".cyan());
        rebuild(ctx);
    })?;

    Ok(())
}

fn rebuild(ctx: &Context) {
    if let Err(e) = compile_all(ctx, true) {
        eprintln!("{} {}", "✗".red().bold(), e);
    }
}
