//! Debounced directory watching for rebuild-on-change
//!
//! Wraps `notify-debouncer-full`: bursts of file-system events are coalesced
//! into batches, and only batches touching a source file (by extension,
//! dotfiles and ignored directories excluded) reach the callback.

use notify_debouncer_full::notify::{self, Event, EventKind, RecursiveMode};
use notify_debouncer_full::{DebounceEventResult, new_debouncer};
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("WATCH_FAILED: could not watch '{path}': {source}")]
    WatchFailed {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("WATCH_FAILED: {0}")]
    Notify(#[from] notify::Error),
}

/// What to watch
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory watched recursively
    pub root: PathBuf,
    /// Extension (without dot) of files whose changes trigger the callback
    pub extension: String,
    /// Debounce window
    pub debounce: Duration,
    /// Directories below `root` whose changes are never reported
    ///
    /// Entries that are not strictly inside `root` are ignored themselves.
    pub ignore: Vec<PathBuf>,
}

/// Watch `options.root` and call `on_change` with the changed source paths
///
/// Blocks until the underlying watcher shuts down.
pub fn watch<F>(options: &WatchOptions, mut on_change: F) -> Result<(), WatchError>
where
    F: FnMut(&[PathBuf]),
{
    let (tx, rx) = mpsc::channel::<DebounceEventResult>();

    let mut debouncer = new_debouncer(options.debounce, None, tx)?;
    debouncer
        .watch(&options.root, RecursiveMode::Recursive)
        .map_err(|source| WatchError::WatchFailed {
            path: options.root.clone(),
            source,
        })?;

    log::info!("Watching {}", options.root.display());

    for result in rx {
        match result {
            Ok(events) => {
                let changed =
                    relevant_paths(events.iter().map(|debounced| &debounced.event), options);
                if !changed.is_empty() {
                    log::debug!("Change detected: {:?}", changed);
                    on_change(&changed);
                }
            }
            Err(errors) => {
                for error in errors {
                    log::error!("Watch error: {:?}", error);
                }
            }
        }
    }

    Ok(())
}

/// Source files touched by a batch of events, deduplicated in first-seen order
pub fn relevant_paths<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    options: &WatchOptions,
) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for event in events {
        if !matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) {
            continue;
        }

        for path in &event.paths {
            if is_source_path(path, &options.root, &options.extension)
                && !is_ignored(path, &options.root, &options.ignore)
                && !paths.contains(path)
            {
                paths.push(path.clone());
            }
        }
    }

    paths
}

/// Whether `path` is a non-hidden file with the given extension
pub fn is_source_path(path: &Path, root: &Path, extension: &str) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let hidden = relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    });

    !hidden && path.extension().is_some_and(|ext| ext == extension)
}

/// Whether `path` lies in one of the `ignore` directories nested in `root`
pub fn is_ignored(path: &Path, root: &Path, ignore: &[PathBuf]) -> bool {
    ignore
        .iter()
        .filter(|dir| dir.starts_with(root) && dir.as_path() != root)
        .any(|dir| path.starts_with(dir))
}
