//! crates/logging/src/halt.rs
//!
//! Developer halts: the deliberate stop issued by
//! [`LevelLogger::log_and_fail`](crate::LevelLogger::log_and_fail) and
//! [`LevelLogger::assert`](crate::LevelLogger::assert). A halt is not an
//! error; it only fires while the logger is in development mode and is a
//! no-op otherwise. The handler decides what "stop" means.

use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use logging_sink::MessageSink;

use crate::call_site::CallSite;
use crate::severity::Severity;

/// Description of a triggered developer halt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HaltReport {
    message: String,
    severity: Severity,
    function: String,
    file: String,
    line: u32,
}

impl HaltReport {
    /// Builds a report for `message` raised at `call_site`.
    #[must_use]
    pub fn new(message: &str, severity: Severity, call_site: &CallSite<'_>) -> Self {
        Self {
            message: message.to_owned(),
            severity,
            function: call_site.function().to_owned(),
            file: call_site.file().to_owned(),
            line: call_site.line(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity the failure was logged with.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Where the halt was raised.
    #[must_use]
    pub fn call_site(&self) -> CallSite<'_> {
        CallSite::new(&self.function, &self.file, self.line)
    }
}

impl fmt::Display for HaltReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "developer halt: {} ({}:{})",
            self.message, self.file, self.line
        )
    }
}

/// Strategy invoked when a developer halt fires.
pub trait DeveloperHalt: Send + Sync {
    /// Stops (or records) execution for `report`.
    fn halt(&self, report: &HaltReport);
}

impl<H> DeveloperHalt for Arc<H>
where
    H: DeveloperHalt + ?Sized,
{
    fn halt(&self, report: &HaltReport) {
        (**self).halt(report);
    }
}

/// Panics with the rendered report, like a failing `debug_assert!`.
///
/// This is the default strategy. It unwinds, so tests can observe it with
/// `#[should_panic]` or [`std::panic::catch_unwind`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PanicHalt;

impl DeveloperHalt for PanicHalt {
    fn halt(&self, report: &HaltReport) {
        panic!("{report}");
    }
}

/// Writes the report to stderr and aborts the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbortHalt;

impl DeveloperHalt for AbortHalt {
    fn halt(&self, report: &HaltReport) {
        let mut sink = MessageSink::new(io::stderr().lock());
        let _ = sink.write(&report.to_string());
        std::process::abort();
    }
}

/// Records reports instead of stopping; clones share the same record.
///
/// ```
/// use logging::{CallSite, DeveloperHalt, HaltReport, RecordingHalt, Severity};
///
/// let halt = RecordingHalt::new();
/// let site = CallSite::new("f", "a.rs", 3);
/// halt.halt(&HaltReport::new("boom", Severity::Error, &site));
/// assert_eq!(halt.count(), 1);
/// assert_eq!(halt.reports()[0].message(), "boom");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingHalt {
    reports: Arc<Mutex<Vec<HaltReport>>>,
}

impl RecordingHalt {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HaltReport>> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every recorded report.
    #[must_use]
    pub fn reports(&self) -> Vec<HaltReport> {
        self.lock().clone()
    }

    /// Number of halts recorded.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Removes and returns every recorded report.
    pub fn take(&self) -> Vec<HaltReport> {
        std::mem::take(&mut *self.lock())
    }
}

impl DeveloperHalt for RecordingHalt {
    fn halt(&self, report: &HaltReport) {
        self.lock().push(report.clone());
    }
}
