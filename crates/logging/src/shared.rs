//! crates/logging/src/shared.rs
//!
//! The process-wide logger used by the macros when no `logger:` is given.
//!
//! Initialization order:
//!
//! 1. Optionally call [`install`] (or [`init`]) once during start-up to choose
//!    the configuration, sinks and halt strategy.
//! 2. The first call to [`logger`] without a prior install installs
//!    [`LevelLogger::default`] (threshold `Info`, console sink, development
//!    mode following `debug_assertions`).
//! 3. Once an instance exists it lives for the rest of the process; later
//!    installs fail with [`InstallError::AlreadyInstalled`]. Settings can still
//!    be changed through the returned reference.

use std::sync::OnceLock;

use crate::config::LoggerConfig;
use crate::error::InstallError;
use crate::logger::LevelLogger;

static SHARED: OnceLock<LevelLogger> = OnceLock::new();

/// Installs `logger` as the process-wide instance.
pub fn install(logger: LevelLogger) -> Result<&'static LevelLogger, InstallError> {
    SHARED
        .set(logger)
        .map_err(|_| InstallError::AlreadyInstalled)?;
    Ok(self::logger())
}

/// Installs a logger built from `config` with the default sinks.
pub fn init(config: LoggerConfig) -> Result<&'static LevelLogger, InstallError> {
    install(LevelLogger::new(config))
}

/// Returns the process-wide logger, installing the default one if needed.
pub fn logger() -> &'static LevelLogger {
    SHARED.get_or_init(LevelLogger::default)
}

/// Reports whether an instance has been installed (explicitly or lazily).
pub fn is_installed() -> bool {
    SHARED.get().is_some()
}
