//! Collaborators the composer reads from: fragment files and named values

use std::path::PathBuf;

/// Supplies the raw text of fragment files
pub trait FragmentLoader {
    /// Load the fragment at `path` (relative to the loader's root)
    ///
    /// Any failure to read (missing file, permissions, a directory) is
    /// reported as `None`.
    fn load(&self, path: &str) -> Option<String>;
}

/// Supplies values for `@env` directives
pub trait ValueSource {
    /// Look up `name`; absent values are the empty string
    fn lookup(&self, name: &str) -> String;
}

/// Loads fragments from files below a root directory
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FragmentLoader for FsLoader {
    fn load(&self, path: &str) -> Option<String> {
        let full = self.root.join(path);
        match std::fs::read_to_string(&full) {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("Could not read fragment {}: {}", full.display(), e);
                None
            }
        }
    }
}

/// Reads values from the process environment when enabled
///
/// A disabled source never touches the environment.
#[derive(Debug, Clone, Copy)]
pub struct EnvValues {
    enabled: bool,
}

impl EnvValues {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl ValueSource for EnvValues {
    fn lookup(&self, name: &str) -> String {
        if !self.enabled {
            return String::new();
        }
        std::env::var(name).unwrap_or_default()
    }
}
