#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `level-logger` is the umbrella crate for the workspace. It re-exports the
//! leveled logger from `logging` together with the macros, and exposes the
//! low-level output primitives from `logging-sink` under [`output`].
//!
//! # Examples
//!
//! Inject a logger explicitly:
//!
//! ```
//! use level_logger::{LevelLogger, LoggerConfig, MemorySink, Severity, log};
//!
//! let console = MemorySink::new();
//! let logger = LevelLogger::builder()
//!     .config(LoggerConfig::development().with_threshold(Severity::Debug))
//!     .console_sink(console.clone())
//!     .build();
//!
//! log!(logger: &logger, level: Severity::Debug, "cache warmed in {}ms", 12);
//! assert!(console.lines()[0].ends_with("🐞: cache warmed in 12ms"));
//! ```
//!
//! Or configure the shared instance once at start-up:
//!
//! ```no_run
//! use level_logger::{LoggerConfig, Severity, log, shared};
//!
//! shared::init(LoggerConfig::production().with_system_sink(true)).unwrap();
//! log!(level: Severity::Error, "upstream refused connection");
//! ```

pub use logging::{
    AbortHalt, CallSite, CapturedEntry, ConsoleSink, DeveloperHalt, EntrySink, HaltReport,
    InstallError, LevelLogger, LevelLoggerBuilder, LogEntry, LoggerConfig, MemorySink, PanicHalt,
    ParseSeverityError, RecordingHalt, Severity, SystemSink, WriterSink, call_site, format_entry,
    log, log_and_fail, log_assert, shared,
};

#[cfg(feature = "tracing")]
pub use logging::{LevelLayer, init_tracing, init_tracing_with_filter};

/// Writer and syslog primitives underneath the sinks.
pub mod output {
    pub use logging_sink::{LineMode, MessageSink};

    #[cfg(unix)]
    pub use logging_sink::syslog;
}
