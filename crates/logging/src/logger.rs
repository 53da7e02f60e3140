//! crates/logging/src/logger.rs
//! The level logger: gate, format, route, and halt.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::call_site::CallSite;
use crate::config::LoggerConfig;
use crate::format::LogEntry;
use crate::halt::{DeveloperHalt, HaltReport, PanicHalt};
use crate::severity::Severity;
use crate::sink::{ConsoleSink, EntrySink, SystemSink};

/// Severity-filtered logger with two mutually exclusive destinations.
///
/// Settings can be changed at any time through `&self`. They are stored in
/// relaxed atomics: a change is visible to later calls on the same thread
/// immediately, but other threads get no ordering guarantee relative to their
/// own work.
///
/// ```
/// use logging::{LevelLogger, LoggerConfig, MemorySink, Severity, call_site};
///
/// let console = MemorySink::new();
/// let logger = LevelLogger::builder()
///     .config(LoggerConfig::development().with_threshold(Severity::Warning))
///     .console_sink(console.clone())
///     .build();
///
/// logger.log("disk almost full", Severity::Warning, &call_site!());
/// logger.log("tick", Severity::Debug, &call_site!());
///
/// assert_eq!(console.len(), 1);
/// assert!(console.lines()[0].ends_with("\n⚠️: disk almost full"));
/// ```
pub struct LevelLogger {
    threshold: AtomicU8,
    use_system_sink: AtomicBool,
    development_mode: AtomicBool,
    system: Box<dyn EntrySink>,
    console: Box<dyn EntrySink>,
    halt: Box<dyn DeveloperHalt>,
}

impl LevelLogger {
    /// Creates a logger with the platform system sink, the stdout console
    /// sink and [`PanicHalt`].
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Starts building a logger with custom sinks or halt strategy.
    #[must_use]
    pub fn builder() -> LevelLoggerBuilder {
        LevelLoggerBuilder::default()
    }

    /// Returns the current threshold.
    pub fn threshold(&self) -> Severity {
        // Only ever written from a `Severity`, so the fallback is unreachable.
        Severity::from_rank(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Replaces the threshold; later calls use it immediately.
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold.rank(), Ordering::Relaxed);
    }

    /// Reports whether entries go to the system sink.
    pub fn uses_system_sink(&self) -> bool {
        self.use_system_sink.load(Ordering::Relaxed)
    }

    /// Selects the system sink (`true`) or the console sink (`false`).
    pub fn set_use_system_sink(&self, use_system_sink: bool) {
        self.use_system_sink.store(use_system_sink, Ordering::Relaxed);
    }

    /// Reports whether the console sink and developer halts are active.
    pub fn is_development_mode(&self) -> bool {
        self.development_mode.load(Ordering::Relaxed)
    }

    /// Enables or disables development mode.
    pub fn set_development_mode(&self, development_mode: bool) {
        self.development_mode.store(development_mode, Ordering::Relaxed);
    }

    /// Returns a snapshot of the current settings.
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            threshold: self.threshold(),
            use_system_sink: self.uses_system_sink(),
            development_mode: self.is_development_mode(),
        }
    }

    /// Replaces all settings at once (each field is stored independently).
    pub fn apply(&self, config: LoggerConfig) {
        self.set_threshold(config.threshold);
        self.set_use_system_sink(config.use_system_sink);
        self.set_development_mode(config.development_mode);
    }

    /// Reports whether an entry of `severity` passes the threshold.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.passes(self.threshold())
    }

    fn destination(&self) -> Option<&dyn EntrySink> {
        if self.uses_system_sink() {
            Some(&*self.system)
        } else if self.is_development_mode() {
            Some(&*self.console)
        } else {
            None
        }
    }

    /// Emits `message` if `severity` passes the threshold.
    ///
    /// The system sink is used whenever it is selected, in any mode; the
    /// console sink only in development mode. Nothing is returned and nothing
    /// can fail.
    pub fn log(&self, message: &str, severity: Severity, call_site: &CallSite<'_>) {
        if !self.enabled(severity) {
            return;
        }
        let Some(sink) = self.destination() else {
            return;
        };
        let entry = LogEntry::new(call_site, severity, message).to_string();
        sink.emit(severity, &entry);
    }

    /// Logs `message`, then triggers a developer halt.
    ///
    /// The halt fires in development mode even if the entry itself was
    /// filtered out by the threshold; outside development mode it does
    /// nothing.
    pub fn log_and_fail(&self, message: &str, severity: Severity, call_site: &CallSite<'_>) {
        self.log(message, severity, call_site);
        if self.is_development_mode() {
            self.halt.halt(&HaltReport::new(message, severity, call_site));
        }
    }

    /// Calls [`log_and_fail`](Self::log_and_fail) with `failure_message` when
    /// `condition` is false; does nothing at all when it is true.
    pub fn assert(
        &self,
        condition: bool,
        failure_message: &str,
        severity: Severity,
        call_site: &CallSite<'_>,
    ) {
        if !condition {
            self.log_and_fail(failure_message, severity, call_site);
        }
    }
}

impl Default for LevelLogger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger")
            .field("threshold", &self.threshold())
            .field("use_system_sink", &self.uses_system_sink())
            .field("development_mode", &self.is_development_mode())
            .finish_non_exhaustive()
    }
}

/// Builder for [`LevelLogger`]; unset sinks and halt use the defaults of
/// [`LevelLogger::new`].
#[derive(Default)]
pub struct LevelLoggerBuilder {
    config: LoggerConfig,
    system: Option<Box<dyn EntrySink>>,
    console: Option<Box<dyn EntrySink>>,
    halt: Option<Box<dyn DeveloperHalt>>,
}

impl LevelLoggerBuilder {
    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the threshold.
    #[must_use]
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Selects the system sink (`true`) or the console sink (`false`).
    #[must_use]
    pub fn use_system_sink(mut self, use_system_sink: bool) -> Self {
        self.config.use_system_sink = use_system_sink;
        self
    }

    /// Enables or disables development mode.
    #[must_use]
    pub fn development_mode(mut self, development_mode: bool) -> Self {
        self.config.development_mode = development_mode;
        self
    }

    /// Replaces the system sink.
    #[must_use]
    pub fn system_sink(mut self, sink: impl EntrySink + 'static) -> Self {
        self.system = Some(Box::new(sink));
        self
    }

    /// Replaces the console sink.
    #[must_use]
    pub fn console_sink(mut self, sink: impl EntrySink + 'static) -> Self {
        self.console = Some(Box::new(sink));
        self
    }

    /// Replaces the developer halt strategy.
    #[must_use]
    pub fn halt(mut self, halt: impl DeveloperHalt + 'static) -> Self {
        self.halt = Some(Box::new(halt));
        self
    }

    /// Builds the logger.
    #[must_use]
    pub fn build(self) -> LevelLogger {
        LevelLogger {
            threshold: AtomicU8::new(self.config.threshold.rank()),
            use_system_sink: AtomicBool::new(self.config.use_system_sink),
            development_mode: AtomicBool::new(self.config.development_mode),
            system: self.system.unwrap_or_else(|| Box::new(SystemSink::new())),
            console: self.console.unwrap_or_else(|| Box::new(ConsoleSink)),
            halt: self.halt.unwrap_or_else(|| Box::new(PanicHalt)),
        }
    }
}

impl fmt::Debug for LevelLoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLoggerBuilder")
            .field("config", &self.config)
            .field("custom_system_sink", &self.system.is_some())
            .field("custom_console_sink", &self.console.is_some())
            .field("custom_halt", &self.halt.is_some())
            .finish()
    }
}
