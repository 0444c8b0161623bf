//! Test utilities for htmlify
//!
//! This crate provides shared testing utilities used across the htmlify workspace.

pub mod env;
pub mod fixtures;

pub use env::{ENV_LOCK, with_env_vars};
pub use fixtures::Site;

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// This keeps test files in a single gitignored location that is easy to
/// clean up manually if needed.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` or the
/// temporary subdirectory cannot be created.
///
/// # Examples
///
/// ```rust
/// use htmlify_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("index.comp");
/// std::fs::write(&file_path, "<html></html>").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_in_workspace_is_under_dot_tmp() {
        let temp = temp_dir_in_workspace();
        assert!(temp.path().exists());
        assert_eq!(
            temp.path().parent().and_then(|p| p.file_name()),
            Some(std::ffi::OsStr::new(".tmp"))
        );
    }

    #[test]
    fn test_temp_dir_is_removed_on_drop() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().to_path_buf();
        drop(temp);
        assert!(!path.exists());
    }
}
