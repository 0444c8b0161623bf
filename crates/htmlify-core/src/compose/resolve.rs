//! Reference resolution for include directives

use std::fmt;

/// Directory segments locating a document relative to the target directory
///
/// Contexts only grow: [`PathContext::join`] derives a new value and leaves
/// the parent untouched, so every recursion level owns its own context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathContext {
    segments: Vec<String>,
}

impl PathContext {
    /// Context of a top-level document
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a context from a `/`-separated directory string
    pub fn from_dir(dir: &str) -> Self {
        Self::root().join(dir)
    }

    /// Derive a child context by appending a `/`-separated relative directory
    pub fn join(&self, dir: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(split_segments(dir).map(str::to_string));
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Concrete location of a fragment named by an include directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRef {
    /// Path relative to the target directory, `/`-separated
    /// (e.g. `nav/_header.comp`)
    pub path: String,
    /// Context the fragment's own includes resolve against
    pub context: PathContext,
}

/// Map an include argument to its fragment file
///
/// `nav/header` inside context `site` with extension `comp` resolves to
/// `site/nav/_header.comp`, and the fragment's own includes resolve
/// against `site/nav`.
pub fn resolve_include(argument: &str, context: &PathContext, extension: &str) -> FragmentRef {
    let (dir, base) = match argument.rsplit_once('/') {
        Some((dir, base)) => (dir, base),
        None => ("", argument),
    };

    let context = context.join(dir);
    let file_name = format!("_{}.{}", base, extension);
    let path = if context.is_root() {
        file_name
    } else {
        format!("{}/{}", context, file_name)
    };

    FragmentRef { path, context }
}

fn split_segments(dir: &str) -> impl Iterator<Item = &str> {
    dir.split('/').filter(|segment| !segment.is_empty())
}
