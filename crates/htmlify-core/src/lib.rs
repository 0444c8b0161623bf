// Core modules
pub mod build;
pub mod compile;
pub mod compose;
pub mod config;
pub mod discover;
pub mod error;

// Re-export commonly used types
pub use build::{BuildReport, DocumentOutcome, build_all};
pub use compose::{ComposeError, Composer, PathContext};
pub use config::Config;
pub use error::{HtmlifyError, Result};
