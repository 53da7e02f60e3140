//! crates/logging/src/severity.rs
//! Ranked severities and their display icons.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSeverityError;

/// Importance of a log entry, ordered from most severe (rank 0) to least
/// severe (rank 4).
///
/// The derived [`Ord`] follows the rank, so `Severity::Critical <
/// Severity::Debug`. A logger configured with threshold `T` emits an entry of
/// severity `S` iff `S.rank() <= T.rank()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Severity {
    /// Unrecoverable or data-threatening conditions.
    Critical = 0,
    /// Failed operations.
    Error = 1,
    /// Unexpected but tolerated conditions.
    Warning = 2,
    /// Progress and state changes.
    #[default]
    Info = 3,
    /// Developer diagnostics.
    Debug = 4,
}

impl Severity {
    /// All severities ordered by rank, most severe first.
    pub const ALL: [Self; 5] = [
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the numeric rank (0 = most severe).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Looks up the severity with the given rank.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::from_rank(1), Some(Severity::Error));
    /// assert_eq!(Severity::from_rank(5), None);
    /// ```
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Critical),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the glyph printed in front of the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Critical => "🚨",
            Self::Error => "📛",
            Self::Warning => "⚠️",
            Self::Info => "💬",
            Self::Debug => "🐞",
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Reports whether an entry of this severity passes `threshold`.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::Error.passes(Severity::Warning));
    /// assert!(Severity::Warning.passes(Severity::Warning));
    /// assert!(!Severity::Debug.passes(Severity::Info));
    /// ```
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        self.rank() <= threshold.rank()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a name (case-insensitive), a short alias (`crit`, `err`,
    /// `warn`) or a numeric rank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" | "crit" | "0" => Ok(Self::Critical),
            "error" | "err" | "1" => Ok(Self::Error),
            "warning" | "warn" | "2" => Ok(Self::Warning),
            "info" | "3" => Ok(Self::Info),
            "debug" | "4" => Ok(Self::Debug),
            _ => Err(ParseSeverityError::new(s)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.rank()
    }
}
