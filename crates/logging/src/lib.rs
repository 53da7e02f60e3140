#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides a minimal leveled logger. Each entry carries a
//! [`Severity`] and the [`CallSite`] that issued it, and is rendered as two
//! lines:
//!
//! ```text
//! <file base name>[<line>] - <function>
//! <icon>: <message>
//! ```
//!
//! # Design
//!
//! [`LevelLogger`] holds a severity threshold, a sink selector and a
//! development-mode flag. An entry is emitted only when its severity rank is
//! at most the threshold rank (`critical` = 0 through `debug` = 4). The
//! selector routes the entry to the system sink (syslog on Unix) or to the
//! console sink, which is inert outside development mode.
//!
//! [`LevelLogger::log_and_fail`] and [`LevelLogger::assert`] additionally
//! trigger a developer halt through a pluggable [`DeveloperHalt`] strategy.
//! Halts only fire in development mode.
//!
//! Loggers are passed explicitly. For code that cannot thread a handle
//! through, [`shared`] hosts one process-wide instance which the macros use
//! when no `logger:` argument is given.
//!
//! # Invariants
//!
//! - Filtering is decided before the message is rendered.
//! - Exactly one sink is consulted per entry; the selector never changes the
//!   rendered text.
//! - The file base name is the text after the last `/` of the full path.
//!
//! # Examples
//!
//! ```
//! use logging::{LevelLogger, LoggerConfig, MemorySink, Severity, log};
//!
//! let console = MemorySink::new();
//! let logger = LevelLogger::builder()
//!     .config(LoggerConfig::development())
//!     .console_sink(console.clone())
//!     .build();
//!
//! log!(logger: &logger, level: Severity::Warning, "retrying in {}s", 5);
//!
//! assert!(console.lines()[0].ends_with("\n⚠️: retrying in 5s"));
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Severity`] and
//!   [`LoggerConfig`].
//! - `tracing`: a `tracing-subscriber` layer that forwards events into a
//!   [`LevelLogger`].

mod call_site;
mod config;
mod error;
mod format;
mod halt;
mod logger;
mod macros;
mod severity;
pub mod shared;
mod sink;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use call_site::CallSite;
pub use config::LoggerConfig;
pub use error::{InstallError, ParseSeverityError};
pub use format::{LogEntry, format_entry};
pub use halt::{AbortHalt, DeveloperHalt, HaltReport, PanicHalt, RecordingHalt};
pub use logger::{LevelLogger, LevelLoggerBuilder};
pub use severity::Severity;
pub use sink::{CapturedEntry, ConsoleSink, EntrySink, MemorySink, SystemSink, WriterSink};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{LevelLayer, init_tracing, init_tracing_with_filter};

#[doc(hidden)]
pub mod __private {
    pub use crate::call_site::{function_name, type_name_of};
}
