//! Log severity levels and the level filter helpers.
//!
//! Levels are ordered from most to least severe, so `Level::Panic` has index 0
//! and compares less than every other level.

use crate::ParseLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Highest severity; the framework panics after logging.
    Panic = 0,
    /// The framework exits after logging.
    Fatal = 1,
    Error = 2,
    #[serde(alias = "warning")]
    Warn = 3,
    Info = 4,
    Debug = 5,
    /// Finer-grained than debug.
    Trace = 6,
}

/// Every defined level in canonical order, most severe first.
pub const ALL_LEVELS: [Level; 7] = [
    Level::Panic,
    Level::Fatal,
    Level::Error,
    Level::Warn,
    Level::Info,
    Level::Debug,
    Level::Trace,
];

impl Level {
    /// Position of this level in [`ALL_LEVELS`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a level by its position in [`ALL_LEVELS`].
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| ALL_LEVELS.get(i).copied())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }

    /// This level and every level more severe than it.
    pub fn and_above(self) -> Vec<Level> {
        ALL_LEVELS[..=self.index()].to_vec()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Resolve a hook's accepted levels.
///
/// An empty list means no filtering, so every level is returned. Any other
/// list is returned unchanged.
pub fn accepted_levels(accepted: &[Level]) -> Vec<Level> {
    if accepted.is_empty() {
        return ALL_LEVELS.to_vec();
    }
    accepted.to_vec()
}

/// All levels at least as severe as the level at `index`.
///
/// Returns an empty list when `index` is negative or past the last level;
/// callers treat that as an unsupported level.
pub fn level_threshold(index: i64) -> Vec<Level> {
    match Level::from_index(index) {
        Some(level) => level.and_above(),
        None => Vec::new(),
    }
}
