//! Error types for the redaction hook.

use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactionError>;

/// Errors that can occur while configuring or running the redaction hook.
#[derive(Error, Debug)]
pub enum RedactionError {
    /// A redaction rule is not a valid regular expression.
    ///
    /// This is the only error the redaction path itself produces. Rules
    /// applied before the failing one have already changed the event.
    #[error("invalid redaction rule {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Hook configuration could not be parsed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RedactionError {
    /// The rule that failed to compile, if this is a pattern error.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            RedactionError::Pattern { pattern, .. } => Some(pattern),
            RedactionError::Json(_) => None,
        }
    }
}
