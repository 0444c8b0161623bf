//! Compose module - recursive directive resolution
//!
//! Expands `@include` and `@env` directives in a document, producing a
//! standalone output document.
//!
//! ## Syntax
//!
//! - Include: `@include "nav/header"` is replaced by the composed contents of
//!   `nav/_header.<ext>`, resolved relative to the including document
//! - Value: `@env "NAME"` is replaced by the environment variable `NAME`
//!   (or nothing, when environment lookups are disabled or the variable is unset)
//!
//! Arguments are limited to letters, digits, spaces, `'`, `/`, `_` and `-`.
//!
//! ## Resolution order
//!
//! All includes of a document are resolved first, left to right and depth
//! first. The first missing fragment fails the whole document. Only then are
//! values looked up. Every occurrence is resolved on its own, so two identical
//! directives are two independent lookups.

mod directive;
mod error;
mod resolve;
mod source;

pub use directive::{Directive, DirectiveKind, scan};
pub use error::ComposeError;
pub use resolve::{FragmentRef, PathContext, resolve_include};
pub use source::{EnvValues, FragmentLoader, FsLoader, ValueSource};

/// Maximum include nesting (malformed input protection)
pub const MAX_INCLUDE_DEPTH: usize = 64;

/// Recursive composer over a fragment loader and a value source
pub struct Composer<'a, L: ?Sized, V: ?Sized> {
    loader: &'a L,
    values: &'a V,
    extension: String,
    max_depth: usize,
}

impl<'a, L, V> Composer<'a, L, V>
where
    L: FragmentLoader + ?Sized,
    V: ValueSource + ?Sized,
{
    /// Create a composer resolving fragments with the given input extension
    pub fn new(loader: &'a L, values: &'a V, extension: impl Into<String>) -> Self {
        Self {
            loader,
            values,
            extension: extension.into(),
            max_depth: MAX_INCLUDE_DEPTH,
        }
    }

    /// Override the maximum include nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Expand every directive in `text`
    ///
    /// `context` is the directory of the document relative to the target
    /// directory; top-level documents use [`PathContext::root`].
    pub fn compose(&self, text: &str, context: &PathContext) -> Result<String, ComposeError> {
        let mut stack = Vec::new();
        self.compose_nested(text, context, &mut stack)
    }

    fn compose_nested(
        &self,
        text: &str,
        context: &PathContext,
        stack: &mut Vec<String>,
    ) -> Result<String, ComposeError> {
        let includes = scan(text, DirectiveKind::Include);
        let values = scan(text, DirectiveKind::Env);

        // Step 1: Includes, in order; the first failure aborts the document
        let mut include_output = Vec::with_capacity(includes.len());
        for directive in &includes {
            let expanded = self.expand_include(directive, context, stack)?;
            include_output.push(expanded);
        }

        // Step 2: Values (never fail)
        let value_output: Vec<String> = values
            .iter()
            .map(|directive| self.values.lookup(&directive.argument))
            .collect();

        // Step 3: Positional substitution
        let replacements = includes
            .iter()
            .zip(include_output)
            .chain(values.iter().zip(value_output))
            .collect();

        Ok(substitute(text, replacements))
    }

    fn expand_include(
        &self,
        directive: &Directive,
        context: &PathContext,
        stack: &mut Vec<String>,
    ) -> Result<String, ComposeError> {
        let fragment = resolve_include(&directive.argument, context, &self.extension);

        if stack.contains(&fragment.path) {
            let mut chain = stack.clone();
            chain.push(fragment.path.clone());
            return Err(ComposeError::IncludeCycle {
                fragment: fragment.path,
                chain,
            });
        }

        if stack.len() >= self.max_depth {
            return Err(ComposeError::DepthExceeded {
                fragment: fragment.path,
                max_depth: self.max_depth,
            });
        }

        let source = self
            .loader
            .load(&fragment.path)
            .ok_or_else(|| ComposeError::FragmentNotFound {
                path: fragment.path.clone(),
            })?;

        log::debug!("Including {} (context '{}')", fragment.path, fragment.context);

        stack.push(fragment.path);
        let expanded = self.compose_nested(&source, &fragment.context, stack);
        stack.pop();

        expanded
    }
}

/// Replace each directive span in `text` with its resolved output
///
/// Include and value spans never overlap, so merging both lists by position
/// keeps the text between directives intact.
fn substitute(text: &str, mut replacements: Vec<(&Directive, String)>) -> String {
    replacements.sort_by_key(|(directive, _)| directive.start);

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for (directive, replacement) in replacements {
        debug_assert!(directive.start >= cursor, "directive spans overlap");
        output.push_str(&text[cursor..directive.start]);
        output.push_str(&replacement);
        cursor = directive.end;
    }
    output.push_str(&text[cursor..]);

    output
}

#[cfg(test)]
mod tests;
