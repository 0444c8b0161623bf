//! Composition error types

use std::fmt;

/// Reasons a document could not be composed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// An include directive named a fragment that could not be loaded
    FragmentNotFound {
        /// Computed fragment path, relative to the target directory
        path: String,
    },

    /// A fragment (directly or transitively) includes itself
    IncludeCycle {
        /// Fragment that was entered twice
        fragment: String,
        /// Fragments on the include stack, outermost first, ending with `fragment`
        chain: Vec<String>,
    },

    /// Includes nested deeper than the composer allows
    DepthExceeded {
        /// Fragment whose inclusion crossed the limit
        fragment: String,
        max_depth: usize,
    },
}

impl ComposeError {
    /// Fragment path the error refers to
    pub fn fragment(&self) -> &str {
        match self {
            ComposeError::FragmentNotFound { path } => path,
            ComposeError::IncludeCycle { fragment, .. } => fragment,
            ComposeError::DepthExceeded { fragment, .. } => fragment,
        }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::FragmentNotFound { path } => {
                write!(f, "File \"{}\" not found", path)
            }
            ComposeError::IncludeCycle { fragment, chain } => {
                write!(
                    f,
                    "Circular include of \"{}\" ({})",
                    fragment,
                    chain.join(" -> ")
                )
            }
            ComposeError::DepthExceeded {
                fragment,
                max_depth,
            } => {
                write!(
                    f,
                    "Include of \"{}\" exceeds the maximum nesting depth of {}",
                    fragment, max_depth
                )
            }
        }
    }
}

impl std::error::Error for ComposeError {}
