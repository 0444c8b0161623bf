//! Build command - compile every top-level document once

use crate::context::Context;
use crate::output::print_json;
use anyhow::{Result, bail};
use colored::Colorize;
use htmlify_core::{BuildReport, build_all};
use serde_json::json;
use std::time::Instant;

/// Compile all documents and report per-document outcomes
///
/// # Arguments
///
/// * `ctx` - Loaded context
/// * `json` - Output the report as JSON if true
///
/// # Errors
///
/// Fails when the target directory cannot be read, or after all documents
/// were attempted when at least one of them failed.
pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let report = compile_all(ctx, !json)?;

    if json {
        print_json(&serde_json::to_string_pretty(&report_json(&report))?)?;
    }

    let failed = report.failed().count();
    if failed > 0 {
        bail!(
            "{} of {} document(s) failed to compile",
            failed,
            report.documents.len()
        );
    }

    Ok(())
}

/// Run a full build, optionally printing progress lines
pub(crate) fn compile_all(ctx: &Context, print: bool) -> Result<BuildReport> {
    if print && ctx.verbose {
        println!(
            "{} Compiling '{}' into '{}'",
            "→".cyan(),
            ctx.config.target_dir.display(),
            ctx.config.out_dir.display()
        );
    }

    let start = Instant::now();
    let report = build_all(&ctx.config)?;
    let duration_ms = start.elapsed().as_millis();

    if print {
        print_report(&report, duration_ms);
    }

    Ok(report)
}

fn print_report(report: &BuildReport, duration_ms: u128) {
    if report.is_empty() {
        println!("{} No documents found", "!".yellow());
        return;
    }

    for outcome in &report.documents {
        match &outcome.result {
            Ok(output) => println!(
                "{} Compiled '{}' to {}",
                "✓".green().bold(),
                outcome.file,
                output.display()
            ),
            Err(e) => eprintln!("{} {}: {}", "✗".red().bold(), outcome.file, e),
        }
    }

    println!(
        "\n{} Compiled {} of {} document(s) ({}ms)",
        if report.is_success() {
            "✓".green().bold()
        } else {
            "!".yellow().bold()
        },
        report.succeeded().count(),
        report.documents.len(),
        duration_ms
    );
}

fn report_json(report: &BuildReport) -> serde_json::Value {
    let documents: Vec<_> = report
        .documents
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(output) => json!({
                "file": outcome.file,
                "success": true,
                "output": output.display().to_string(),
            }),
            Err(e) => json!({
                "file": outcome.file,
                "success": false,
                "error": e.to_string(),
            }),
        })
        .collect();

    json!({
        "success": report.is_success(),
        "documents": documents,
    })
}
