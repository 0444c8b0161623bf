use std::path::PathBuf;
use thiserror::Error;

use crate::compose::ComposeError;

#[derive(Error, Debug)]
pub enum HtmlifyError {
    // Composition errors
    #[error("FRAGMENT_NOT_FOUND: file '{0}' not found")]
    FragmentNotFound(String),

    #[error("INCLUDE_CYCLE: '{fragment}' includes itself via {chain}")]
    IncludeCycle { fragment: String, chain: String },

    #[error("INCLUDE_DEPTH_EXCEEDED: includes nested deeper than {max_depth} at '{fragment}'")]
    IncludeDepthExceeded { fragment: String, max_depth: usize },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse {path}: {reason}")]
    ConfigParseError { path: PathBuf, reason: String },

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Build errors
    #[error("TARGET_DIR_UNREADABLE: could not read directory '{path}': {reason}")]
    TargetDirUnreadable { path: PathBuf, reason: String },

    #[error("DOCUMENT_UNREADABLE: could not read '{path}': {reason}")]
    DocumentUnreadable { path: PathBuf, reason: String },

    #[error("OUT_DIR_UNAVAILABLE: could not find or create outDir '{path}': {reason}")]
    OutDirUnavailable { path: PathBuf, reason: String },

    #[error("WRITE_FAILED: could not write '{path}': {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<ComposeError> for HtmlifyError {
    fn from(err: ComposeError) -> Self {
        match err {
            ComposeError::FragmentNotFound { path } => HtmlifyError::FragmentNotFound(path),
            ComposeError::IncludeCycle { fragment, chain } => HtmlifyError::IncludeCycle {
                fragment,
                chain: chain.join(" -> "),
            },
            ComposeError::DepthExceeded {
                fragment,
                max_depth,
            } => HtmlifyError::IncludeDepthExceeded {
                fragment,
                max_depth,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, HtmlifyError>;
