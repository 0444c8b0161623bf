//! Discovery of top-level documents

use std::path::PathBuf;
use walkdir::WalkDir;

use crate::config::Config;
use crate::config::consts::FRAGMENT_PREFIX;
use crate::error::{HtmlifyError, Result};

/// Whether `file_name` is a top-level document for `extension`
///
/// Fragments (leading `_`) and other extensions are excluded.
pub fn is_top_level_document(file_name: &str, extension: &str) -> bool {
    !file_name.starts_with(FRAGMENT_PREFIX)
        && file_name
            .strip_suffix(extension)
            .and_then(|stem| stem.strip_suffix('.'))
            .is_some_and(|stem| !stem.is_empty())
}

/// List the top-level documents directly inside the target directory
///
/// Returns file names (not paths), sorted.
pub fn discover_documents(config: &Config) -> Result<Vec<String>> {
    let dir = &config.target_dir;
    if !dir.is_dir() {
        return Err(HtmlifyError::TargetDirUnreadable {
            path: dir.clone(),
            reason: "not a directory".to_string(),
        });
    }

    let mut documents = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // The directory itself could not be listed
            Err(e) if e.depth() == 0 => {
                return Err(HtmlifyError::TargetDirUnreadable {
                    path: dir.clone(),
                    reason: e.to_string(),
                });
            }
            // A single entry (e.g. a dangling symlink) is never a document
            Err(e) => {
                log::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            log::debug!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };

        if is_top_level_document(name, &config.input_extension) {
            documents.push(name.to_string());
        }
    }

    documents.sort();
    Ok(documents)
}

/// Output file name for a top-level document
///
/// `index.comp` becomes `index.html` for the default extensions.
pub fn output_file_name(file_name: &str, config: &Config) -> String {
    let stem = file_name
        .strip_suffix(config.input_extension.as_str())
        .and_then(|stem| stem.strip_suffix('.'))
        .unwrap_or(file_name);
    format!("{}.{}", stem, config.output_extension)
}

/// Full output path for a top-level document
pub fn output_path(file_name: &str, config: &Config) -> PathBuf {
    config.out_dir.join(output_file_name(file_name, config))
}
