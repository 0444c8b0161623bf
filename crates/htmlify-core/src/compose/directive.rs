//! Directive scanning
//!
//! Finds `@include "..."` and `@env "..."` statements in document text.
//! Scanning is a pure function of the input: every call builds a fresh
//! match iterator, so nothing carries over between documents.

use regex::Regex;
use std::sync::LazyLock;

static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@include "([A-Za-z0-9' /_-]+)""#).expect("include pattern is valid")
});

static ENV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@env "([A-Za-z0-9' /_-]+)""#).expect("env pattern is valid")
});

/// Kind of directive statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `@include "path/to/fragment"`
    Include,
    /// `@env "NAME"`
    Env,
}

impl DirectiveKind {
    fn pattern(self) -> &'static Regex {
        match self {
            DirectiveKind::Include => &INCLUDE_RE,
            DirectiveKind::Env => &ENV_RE,
        }
    }
}

/// A single directive statement found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Byte offset of the leading `@`
    pub start: usize,
    /// Byte offset one past the closing quote
    pub end: usize,
    /// Full statement text, e.g. `@include "nav/header"`
    pub statement: String,
    /// Text between the quotes
    pub argument: String,
}

/// Scan `text` for every directive of `kind`, left to right, non-overlapping
pub fn scan(text: &str, kind: DirectiveKind) -> Vec<Directive> {
    kind.pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let argument = caps.get(1)?;
            Some(Directive {
                kind,
                start: whole.start(),
                end: whole.end(),
                statement: whole.as_str().to_string(),
                argument: argument.as_str().to_string(),
            })
        })
        .collect()
}
