//! crates/logging/src/config.rs
//! Logger configuration: threshold, sink selection and development mode.

use crate::severity::Severity;

/// Snapshot of a [`LevelLogger`](crate::LevelLogger)'s mutable settings.
///
/// The configuration is built programmatically; with the `serde` feature it
/// can also be embedded in a host application's own configuration file.
/// Missing fields fall back to [`LoggerConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoggerConfig {
    /// Least severe severity that is still emitted.
    pub threshold: Severity,
    /// Route entries to the system log instead of the development console.
    pub use_system_sink: bool,
    /// Enables the console sink and developer halts.
    pub development_mode: bool,
}

impl LoggerConfig {
    /// Configuration for development builds: threshold `Info`, console sink,
    /// halts enabled.
    #[must_use]
    pub const fn development() -> Self {
        Self {
            threshold: Severity::Info,
            use_system_sink: false,
            development_mode: true,
        }
    }

    /// Configuration for production builds: threshold `Info`, console sink
    /// (therefore silent), halts disabled.
    #[must_use]
    pub const fn production() -> Self {
        Self {
            development_mode: false,
            ..Self::development()
        }
    }

    /// Sets the threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Selects the system sink (`true`) or the console sink (`false`).
    #[must_use]
    pub const fn with_system_sink(mut self, use_system_sink: bool) -> Self {
        self.use_system_sink = use_system_sink;
        self
    }

    /// Enables or disables development mode.
    #[must_use]
    pub const fn with_development_mode(mut self, development_mode: bool) -> Self {
        self.development_mode = development_mode;
        self
    }
}

impl Default for LoggerConfig {
    /// Threshold `Info`, console sink, development mode following
    /// `debug_assertions`.
    fn default() -> Self {
        Self::development().with_development_mode(cfg!(debug_assertions))
    }
}
