//! crates/logging/src/sink/mod.rs
//!
//! Destinations for rendered entries. The logger picks exactly one sink per
//! entry: the system sink when `use_system_sink` is set, otherwise the console
//! sink (only in development mode). Sinks swallow their own I/O errors so
//! logging never fails from the caller's point of view.

use std::sync::Arc;

use crate::severity::Severity;

mod console;
mod memory;
mod system;
mod writer;

pub use console::ConsoleSink;
pub use memory::{CapturedEntry, MemorySink};
pub use system::SystemSink;
pub use writer::WriterSink;

/// Destination for rendered log entries.
///
/// `entry` is the fully rendered two-line text without a trailing newline;
/// `severity` is passed along for sinks that map it to their own priority
/// scheme.
pub trait EntrySink: Send + Sync {
    /// Writes one entry.
    fn emit(&self, severity: Severity, entry: &str);
}

impl<S> EntrySink for Arc<S>
where
    S: EntrySink + ?Sized,
{
    fn emit(&self, severity: Severity, entry: &str) {
        (**self).emit(severity, entry);
    }
}

impl<S> EntrySink for Box<S>
where
    S: EntrySink + ?Sized,
{
    fn emit(&self, severity: Severity, entry: &str) {
        (**self).emit(severity, entry);
    }
}
