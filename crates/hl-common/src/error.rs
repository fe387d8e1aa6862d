//! Error types for hushlog common types.

use thiserror::Error;

/// Returned when a string does not name a known log level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a valid log level: {0:?}")]
pub struct ParseLevelError(pub String);
