//! Build orchestration - compile every top-level document
//!
//! Each document is an independent task. Tasks run in parallel and a failing
//! document never stops the others; every outcome is collected into a
//! [`BuildReport`] in discovery order.

use rayon::prelude::*;
use std::path::PathBuf;

use crate::compile::compile_file;
use crate::config::Config;
use crate::discover::discover_documents;
use crate::error::{HtmlifyError, Result};

/// Outcome of compiling one top-level document
#[derive(Debug)]
pub struct DocumentOutcome {
    /// File name inside the target directory
    pub file: String,
    /// Written output path, or why nothing was written
    pub result: Result<PathBuf>,
}

impl DocumentOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a full build
#[derive(Debug, Default)]
pub struct BuildReport {
    pub documents: Vec<DocumentOutcome>,
}

impl BuildReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &DocumentOutcome> {
        self.documents.iter().filter(|d| d.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, &HtmlifyError)> {
        self.documents
            .iter()
            .filter_map(|d| d.result.as_ref().err().map(|e| (d.file.as_str(), e)))
    }

    pub fn is_success(&self) -> bool {
        self.documents.iter().all(DocumentOutcome::is_success)
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Discover and compile every top-level document
///
/// Fails only when the target directory cannot be listed.
pub fn build_all(config: &Config) -> Result<BuildReport> {
    let files = discover_documents(config)?;
    log::info!(
        "Compiling {} document(s) from {}",
        files.len(),
        config.target_dir.display()
    );

    let documents = files
        .into_par_iter()
        .map(|file| {
            let result = compile_file(config, &file);
            if let Err(e) = &result {
                log::debug!("Failed to compile {}: {}", file, e);
            }
            DocumentOutcome { file, result }
        })
        .collect();

    Ok(BuildReport { documents })
}
