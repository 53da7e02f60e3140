#[cfg(unix)]
use logging_sink::syslog::{SyslogConfig, SyslogGuard, SyslogPriority, syslog_message};

use super::EntrySink;
use crate::severity::Severity;

/// System log sink, active regardless of development mode.
///
/// On Unix entries go to syslog(3) with a priority derived from the severity.
/// Elsewhere they are written to stderr.
#[derive(Debug, Default)]
pub struct SystemSink {
    #[cfg(unix)]
    _connection: Option<SyslogGuard>,
}

impl SystemSink {
    /// Creates a sink using the platform defaults. On Unix the syslog
    /// connection is opened lazily by the C library.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            #[cfg(unix)]
            _connection: None,
        }
    }

    /// Opens a syslog connection with an explicit facility and tag. The
    /// connection is closed when the sink is dropped.
    #[cfg(unix)]
    #[must_use]
    pub fn open(config: &SyslogConfig) -> Self {
        Self {
            _connection: Some(config.open()),
        }
    }
}

/// Maps a severity to the syslog priority it is logged with.
#[cfg(unix)]
#[must_use]
pub(crate) const fn syslog_priority(severity: Severity) -> SyslogPriority {
    match severity {
        Severity::Critical => SyslogPriority::Critical,
        Severity::Error => SyslogPriority::Error,
        Severity::Warning => SyslogPriority::Warning,
        Severity::Info => SyslogPriority::Info,
        Severity::Debug => SyslogPriority::Debug,
    }
}

impl EntrySink for SystemSink {
    #[cfg(unix)]
    fn emit(&self, severity: Severity, entry: &str) {
        syslog_message(syslog_priority(severity), entry);
    }

    #[cfg(not(unix))]
    fn emit(&self, _severity: Severity, entry: &str) {
        let mut sink = logging_sink::MessageSink::new(std::io::stderr().lock());
        let _ = sink.write(entry);
    }
}
