//! Shared test collaborators for composer tests

use crate::compose::{FragmentLoader, ValueSource};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Fragment loader backed by a map of relative path to text
#[derive(Default)]
pub(super) struct MemoryLoader {
    files: HashMap<String, String>,
    loads: RefCell<Vec<String>>,
}

impl MemoryLoader {
    pub(super) fn with(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, text)| (path.to_string(), text.to_string()))
                .collect(),
            loads: RefCell::new(Vec::new()),
        }
    }

    /// Paths requested so far, in request order
    pub(super) fn loads(&self) -> Vec<String> {
        self.loads.borrow().clone()
    }
}

impl FragmentLoader for MemoryLoader {
    fn load(&self, path: &str) -> Option<String> {
        self.loads.borrow_mut().push(path.to_string());
        self.files.get(path).cloned()
    }
}

/// Value source backed by a fixed map
pub(super) struct MapValues(HashMap<String, String>);

impl MapValues {
    pub(super) fn with(values: &[(&str, &str)]) -> Self {
        Self(
            values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl ValueSource for MapValues {
    fn lookup(&self, name: &str) -> String {
        self.0.get(name).cloned().unwrap_or_default()
    }
}

/// Value source returning a fresh counter value on every lookup
#[derive(Default)]
pub(super) struct CountingValues {
    calls: Cell<usize>,
}

impl CountingValues {
    pub(super) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ValueSource for CountingValues {
    fn lookup(&self, name: &str) -> String {
        let n = self.calls.get() + 1;
        self.calls.set(n);
        format!("{}#{}", name, n)
    }
}

pub(super) fn no_values() -> MapValues {
    MapValues::with(&[])
}
