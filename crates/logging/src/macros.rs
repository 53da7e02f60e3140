//! crates/logging/src/macros.rs
//! Call-site capturing front ends for [`LevelLogger`](crate::LevelLogger).
//!
//! Every macro accepts an optional leading `logger: <expr>` (anything that
//! auto-derefs to a `LevelLogger`); without it the
//! [`shared`](crate::shared) instance is used. `level: <Severity>` defaults to
//! [`Severity::Info`](crate::Severity::Info). The remaining arguments are
//! `format!` arguments.

/// Logs a formatted message.
///
/// ```
/// use logging::{LevelLogger, LoggerConfig, MemorySink, Severity, log};
///
/// let console = MemorySink::new();
/// let logger = LevelLogger::builder()
///     .config(LoggerConfig::development())
///     .console_sink(console.clone())
///     .build();
///
/// log!(logger: &logger, "loaded {} items", 3);
/// log!(logger: &logger, level: Severity::Debug, "not shown at Info");
///
/// assert_eq!(console.len(), 1);
/// assert!(console.lines()[0].ends_with("💬: loaded 3 items"));
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, level: $level:expr, $($arg:tt)+) => {
        ($logger).log(
            &::std::format!($($arg)+),
            $level,
            &$crate::call_site!(),
        )
    };
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, level: $crate::Severity::Info, $($arg)+)
    };
    (level: $level:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::shared::logger(), level: $level, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!(logger: $crate::shared::logger(), level: $crate::Severity::Info, $($arg)+)
    };
}

/// Logs a formatted message, then triggers a developer halt.
///
/// ```should_panic
/// use logging::{LevelLogger, LoggerConfig, Severity, log_and_fail};
///
/// let logger = LevelLogger::new(LoggerConfig::development());
/// log_and_fail!(logger: &logger, level: Severity::Critical, "unreachable state {}", 7);
/// ```
#[macro_export]
macro_rules! log_and_fail {
    (logger: $logger:expr, level: $level:expr, $($arg:tt)+) => {
        ($logger).log_and_fail(
            &::std::format!($($arg)+),
            $level,
            &$crate::call_site!(),
        )
    };
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_and_fail!(logger: $logger, level: $crate::Severity::Info, $($arg)+)
    };
    (level: $level:expr, $($arg:tt)+) => {
        $crate::log_and_fail!(logger: $crate::shared::logger(), level: $level, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_and_fail!(logger: $crate::shared::logger(), level: $crate::Severity::Info, $($arg)+)
    };
}

/// Checks a condition; when it is false, logs the formatted failure message
/// and triggers a developer halt. The message is only formatted on failure.
///
/// ```
/// use logging::{LevelLogger, LoggerConfig, RecordingHalt, log_assert};
///
/// let halts = RecordingHalt::new();
/// let logger = LevelLogger::builder()
///     .config(LoggerConfig::production())
///     .halt(halts.clone())
///     .build();
///
/// let items = [1, 2, 3];
/// log_assert!(logger: &logger, items.len() == 3, "expected three items");
/// log_assert!(logger: &logger, items.is_empty(), "not empty: {:?}", items);
///
/// // Production mode: halts are inert.
/// assert_eq!(halts.count(), 0);
/// ```
#[macro_export]
macro_rules! log_assert {
    (logger: $logger:expr, $cond:expr, level: $level:expr, $($arg:tt)+) => {
        if !$cond {
            ($logger).log_and_fail(
                &::std::format!($($arg)+),
                $level,
                &$crate::call_site!(),
            );
        }
    };
    (logger: $logger:expr, $cond:expr, $($arg:tt)+) => {
        $crate::log_assert!(logger: $logger, $cond, level: $crate::Severity::Info, $($arg)+)
    };
    ($cond:expr, level: $level:expr, $($arg:tt)+) => {
        $crate::log_assert!(logger: $crate::shared::logger(), $cond, level: $level, $($arg)+)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::log_assert!(logger: $crate::shared::logger(), $cond, level: $crate::Severity::Info, $($arg)+)
    };
}
