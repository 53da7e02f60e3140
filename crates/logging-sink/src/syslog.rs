//! Syslog backend for the system log sink.
//!
//! Calls libc `openlog`/`syslog`/`closelog` directly. Entries are always
//! passed through a `"%s"` format so `%` in user messages is inert, and
//! interior NUL bytes are replaced so every entry reaches the log.

use std::ffi::{CStr, CString};
use std::sync::OnceLock;

/// Syslog facility codes matching the POSIX syslog(3) constants.
///
/// Each variant corresponds to a `LOG_*` facility from `<syslog.h>`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// Kernel messages (LOG_KERN).
    Kern = libc::LOG_KERN,
    /// User-level messages (LOG_USER), the default for application logging.
    #[default]
    User = libc::LOG_USER,
    /// Mail system (LOG_MAIL).
    Mail = libc::LOG_MAIL,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Security/authorization messages (LOG_AUTH).
    Auth = libc::LOG_AUTH,
    /// Messages generated internally by syslogd (LOG_SYSLOG).
    Syslog = libc::LOG_SYSLOG,
    /// Line printer subsystem (LOG_LPR).
    Lpr = libc::LOG_LPR,
    /// Network news subsystem (LOG_NEWS).
    News = libc::LOG_NEWS,
    /// UUCP subsystem (LOG_UUCP).
    Uucp = libc::LOG_UUCP,
    /// Clock daemon (LOG_CRON).
    Cron = libc::LOG_CRON,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

/// Default syslog tag (ident) used when none is configured.
pub const DEFAULT_SYSLOG_TAG: &str = "level-logger";

const DEFAULT_IDENT: &CStr = c"level-logger";

/// Configuration for the syslog connection.
///
/// Encapsulates the facility, tag (ident) and option flags passed to
/// [`openlog(3)`](libc::openlog). Constructing a [`SyslogConfig`] does not
/// open the connection; call [`open`](SyslogConfig::open) for that. Without
/// an explicit `open`, syslog(3) connects lazily using the program name and
/// `LOG_USER`.
///
/// # Examples
///
/// ```
/// use logging_sink::syslog::{SyslogConfig, SyslogFacility};
///
/// let config = SyslogConfig::new(SyslogFacility::Local5, "my-app").with_stderr_echo(true);
/// assert_eq!(config.facility(), SyslogFacility::Local5);
/// assert_eq!(config.tag(), "my-app");
/// assert!(config.echoes_to_stderr());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    tag: String,
    echo_to_stderr: bool,
}

impl SyslogConfig {
    /// Creates a new syslog configuration with the given facility and tag.
    pub fn new(facility: SyslogFacility, tag: impl Into<String>) -> Self {
        Self {
            facility,
            tag: tag.into(),
            echo_to_stderr: false,
        }
    }

    /// Requests that every entry is also copied to stderr (`LOG_PERROR`).
    #[must_use]
    pub const fn with_stderr_echo(mut self, echo: bool) -> Self {
        self.echo_to_stderr = echo;
        self
    }

    /// Returns the configured syslog facility.
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Returns the configured syslog tag (ident string).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Reports whether entries are echoed to stderr.
    pub const fn echoes_to_stderr(&self) -> bool {
        self.echo_to_stderr
    }

    const fn options(&self) -> libc::c_int {
        if self.echo_to_stderr {
            libc::LOG_PID | libc::LOG_PERROR
        } else {
            libc::LOG_PID
        }
    }

    /// Opens the syslog connection with the configured facility and tag.
    ///
    /// Returns a [`SyslogGuard`] that closes the connection when dropped.
    /// syslog(3) keeps the ident pointer for the lifetime of the process, so
    /// the first tag opened in a process is the one that sticks; later opens
    /// only change facility and options. A tag containing NUL bytes falls back
    /// to [`DEFAULT_SYSLOG_TAG`].
    ///
    /// `openlog` is not safe to race with another `openlog`/`closelog`; open
    /// the connection during start-up, before worker threads log.
    pub fn open(&self) -> SyslogGuard {
        static IDENT: OnceLock<CString> = OnceLock::new();
        let ident = IDENT.get_or_init(|| {
            CString::new(self.tag.as_str()).unwrap_or_else(|_| DEFAULT_IDENT.to_owned())
        });

        // SAFETY: the ident pointer is valid for the process lifetime because
        // it is stored in a static `OnceLock<CString>`.
        unsafe {
            libc::openlog(ident.as_ptr(), self.options(), self.facility as libc::c_int);
        }

        SyslogGuard { _private: () }
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::new(SyslogFacility::default(), DEFAULT_SYSLOG_TAG)
    }
}

/// Syslog priority levels matching POSIX syslog(3) severity constants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogPriority {
    /// System is unusable (LOG_EMERG).
    Emergency = libc::LOG_EMERG,
    /// Action must be taken immediately (LOG_ALERT).
    Alert = libc::LOG_ALERT,
    /// Critical conditions (LOG_CRIT).
    Critical = libc::LOG_CRIT,
    /// Error conditions (LOG_ERR).
    Error = libc::LOG_ERR,
    /// Warning conditions (LOG_WARNING).
    Warning = libc::LOG_WARNING,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = libc::LOG_NOTICE,
    /// Informational messages (LOG_INFO).
    Info = libc::LOG_INFO,
    /// Debug-level messages (LOG_DEBUG).
    Debug = libc::LOG_DEBUG,
}

/// Sends an entry to syslog(3) with the given priority.
///
/// Uses the facility from the most recent [`SyslogConfig::open`] call, or the
/// syslog(3) defaults if the connection was never opened explicitly. Interior
/// NUL bytes are replaced with U+FFFD so the entry is never lost.
pub fn syslog_message(priority: SyslogPriority, message: &str) {
    let c_message = c_entry(message);

    // SAFETY: syslog is safe to call from multiple threads. The format string
    // and message are valid NUL-terminated C strings.
    unsafe {
        libc::syslog(priority as libc::c_int, c"%s".as_ptr(), c_message.as_ptr());
    }
}

/// Converts an entry to a C string, replacing interior NULs with U+FFFD.
fn c_entry(message: &str) -> CString {
    let sanitized = message.replace('\0', "\u{FFFD}");
    // No NUL bytes remain after the replacement.
    CString::new(sanitized).unwrap_or_default()
}

/// RAII guard that closes the syslog connection when dropped.
///
/// Created by [`SyslogConfig::open`].
///
/// # Examples
///
/// ```no_run
/// use logging_sink::syslog::{SyslogConfig, SyslogFacility, SyslogPriority, syslog_message};
///
/// let _guard = SyslogConfig::new(SyslogFacility::User, "my-app").open();
/// syslog_message(SyslogPriority::Info, "started");
/// // guard dropped here, closelog() called
/// ```
#[derive(Debug)]
pub struct SyslogGuard {
    _private: (),
}

impl Drop for SyslogGuard {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions beyond openlog having been
        // called, which the guard's construction guarantees.
        unsafe {
            libc::closelog();
        }
    }
}
