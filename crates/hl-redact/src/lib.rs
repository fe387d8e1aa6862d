//! Pattern-based redaction for structured log events.
//!
//! This crate provides a hook that scans a log event before it is dispatched
//! and replaces sensitive content with `[REDACTED]`.
//!
//! # Key Features
//!
//! - **Key matching**: a field whose name matches a rule has its whole value replaced.
//! - **Partial value matching**: only the matched span of a field value or the
//!   message is replaced; capture groups 1 and 2 around the span are kept.
//! - **Heterogeneous values**: text, typed text, `Display` objects (with a nil
//!   guard) and JSON values are all redacted through their text form.
//! - **Ordered rules**: each rule makes a full pass before the next one runs.
//!
//! # Example
//!
//! ```no_run
//! use hl_common::{Hook, Level, LogEvent};
//! use hl_redact::{HookConfig, RedactHook};
//!
//! let config = HookConfig::new().with_rule("password").with_rule("(token=)\\w+");
//! let hook = RedactHook::new(config).unwrap();
//!
//! let mut event = LogEvent::new(Level::Info, "auth token=abc123")
//!     .with_field("password", "hunter2");
//! if hook.accepts(event.level) {
//!     hook.fire(&mut event).unwrap();
//! }
//! assert_eq!(event.message, "auth token=[REDACTED]");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod hook;
pub mod rules;

pub use config::HookConfig;
pub use engine::redact;
pub use error::{RedactionError, Result};
pub use hook::RedactHook;
pub use rules::{redact_text, CompiledRules, Rule, REDACTION_MARKER};
