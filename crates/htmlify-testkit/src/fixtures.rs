//! Fixture builders for site directories
//!
//! A [`Site`] lays out top-level documents, fragments and config files
//! inside a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::temp_dir_in_workspace;

/// Temporary site directory, removed on drop
pub struct Site {
    temp: TempDir,
}

impl Site {
    /// Create an empty site under `.tmp/`
    pub fn new() -> Self {
        Self {
            temp: temp_dir_in_workspace(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file at `relative`, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Write a fragment named by its include argument
    ///
    /// `fragment("nav/menu", "comp", ..)` writes `nav/_menu.comp`.
    pub fn fragment(&self, include: &str, extension: &str, content: &str) -> PathBuf {
        let relative = match include.rsplit_once('/') {
            Some((dir, base)) => format!("{}/_{}.{}", dir, base, extension),
            None => format!("_{}.{}", include, extension),
        };
        self.write(&relative, content)
    }

    /// Write `htmlify.config.json`
    pub fn config(&self, json: &str) -> PathBuf {
        self.write("htmlify.config.json", json)
    }

    /// Read a file relative to the site root
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root().join(relative).exists()
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}
