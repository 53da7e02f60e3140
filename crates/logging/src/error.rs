//! crates/logging/src/error.rs
//!
//! Errors raised at configuration edges. Logging operations themselves never
//! fail.

use thiserror::Error;

/// Error returned when a string does not name a [`Severity`](crate::Severity).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity `{input}` (expected critical, error, warning, info, debug or 0-4)")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Errors from installing the process-wide logger.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum InstallError {
    /// A logger was already installed, either explicitly or lazily by a
    /// previous call to [`shared::logger`](crate::shared::logger).
    #[error("shared logger already installed")]
    AlreadyInstalled,
}
