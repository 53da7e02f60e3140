//! crates/logging/src/format.rs
//!
//! Rendering of a single log entry. The layout is fixed:
//!
//! ```text
//! <fileBaseName>[<line>] - <functionName>
//! <icon>: <message>
//! ```
//!
//! No trailing newline is produced; sinks decide line termination.

use std::fmt;

use crate::call_site::CallSite;
use crate::severity::Severity;

/// A log entry ready to be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogEntry<'a> {
    call_site: &'a CallSite<'a>,
    severity: Severity,
    message: &'a str,
}

impl<'a> LogEntry<'a> {
    /// Bundles the parts of an entry.
    #[must_use]
    pub const fn new(call_site: &'a CallSite<'a>, severity: Severity, message: &'a str) -> Self {
        Self {
            call_site,
            severity,
            message,
        }
    }

    /// Returns the entry's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] - {}\n{}: {}",
            self.call_site.file_base_name(),
            self.call_site.line(),
            self.call_site.function(),
            self.severity.icon(),
            self.message
        )
    }
}

/// Renders an entry to a new string.
///
/// ```
/// use logging::{CallSite, Severity, format_entry};
///
/// let site = CallSite::new("do_thing", "/x/y/z.rs", 42);
/// assert_eq!(
///     format_entry(&site, Severity::Error, "hello"),
///     "z.rs[42] - do_thing\n📛: hello"
/// );
/// ```
#[must_use]
pub fn format_entry(call_site: &CallSite<'_>, severity: Severity, message: &str) -> String {
    LogEntry::new(call_site, severity, message).to_string()
}
