//! Per-file compilation: read, compose, write

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::compose::{Composer, EnvValues, FsLoader, PathContext};
use crate::config::Config;
use crate::discover::output_path;
use crate::error::{HtmlifyError, Result};

/// Expand a top-level document's text with the configured collaborators
pub fn compose_document(config: &Config, text: &str) -> Result<String> {
    let loader = FsLoader::new(&config.target_dir);
    let values = EnvValues::new(config.env_dir.is_enabled());
    let composer = Composer::new(&loader, &values, config.input_extension.as_str());

    Ok(composer.compose(text, &PathContext::root())?)
}

/// Compile one top-level document from the target directory
///
/// # Steps
/// 1. Read `<targetDir>/<file_name>`
/// 2. Compose it (a missing fragment aborts here, before anything is written)
/// 3. Ensure `outDir` exists
/// 4. Write `<outDir>/<stem>.<outputExtension>` via a temp file + rename
///
/// Returns the written output path.
pub fn compile_file(config: &Config, file_name: &str) -> Result<PathBuf> {
    let input_path = config.target_dir.join(file_name);
    log::debug!("Compiling {}", input_path.display());

    let input =
        fs::read_to_string(&input_path).map_err(|e| HtmlifyError::DocumentUnreadable {
            path: input_path.clone(),
            reason: e.to_string(),
        })?;

    let output = compose_document(config, &input)?;

    ensure_out_dir(&config.out_dir)?;

    let destination = output_path(file_name, config);
    write_atomic(&config.out_dir, &destination, &output)?;

    log::debug!("Wrote {}", destination.display());
    Ok(destination)
}

fn ensure_out_dir(out_dir: &Path) -> Result<()> {
    if out_dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(out_dir).map_err(|e| HtmlifyError::OutDirUnavailable {
        path: out_dir.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_atomic(out_dir: &Path, destination: &Path, content: &str) -> Result<()> {
    let write_failed = |reason: String| HtmlifyError::WriteFailed {
        path: destination.to_path_buf(),
        reason,
    };

    let mut temp = NamedTempFile::new_in(out_dir).map_err(|e| write_failed(e.to_string()))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    temp.persist(destination)
        .map_err(|e| write_failed(e.error.to_string()))?;

    Ok(())
}
