use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::EntrySink;
use crate::severity::Severity;

/// An entry recorded by [`MemorySink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedEntry {
    /// Severity the entry was logged with.
    pub severity: Severity,
    /// Rendered entry text.
    pub text: String,
}

/// Capturing sink; clones share the same buffer.
///
/// Hand one clone to the logger and keep another to inspect what was emitted.
///
/// ```
/// use logging::{EntrySink, MemorySink, Severity};
///
/// let sink = MemorySink::new();
/// let handle = sink.clone();
/// sink.emit(Severity::Warning, "entry");
/// assert_eq!(handle.lines(), ["entry"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<CapturedEntry>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every captured entry.
    #[must_use]
    pub fn entries(&self) -> Vec<CapturedEntry> {
        self.lock().clone()
    }

    /// Returns the text of every captured entry.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(|entry| entry.text.clone()).collect()
    }

    /// Removes and returns every captured entry.
    pub fn drain(&self) -> Vec<CapturedEntry> {
        self.lock().drain(..).collect()
    }

    /// Number of captured entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl EntrySink for MemorySink {
    fn emit(&self, severity: Severity, entry: &str) {
        self.lock().push(CapturedEntry {
            severity,
            text: entry.to_owned(),
        });
    }
}
