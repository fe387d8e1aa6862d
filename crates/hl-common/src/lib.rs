//! hushlog common types.
//!
//! This crate provides the types shared between a logging framework and the
//! hooks it drives:
//! - Severity levels and the level filter helpers
//! - Log events carrying a message and a map of named fields
//! - Heterogeneous field values (text, typed text, stringable objects, nil, JSON)
//! - The `Hook` trait a framework invokes for each accepted event

pub mod error;
pub mod event;
pub mod hook;
pub mod level;
pub mod value;

pub use error::ParseLevelError;
pub use event::{Fields, LogEvent};
pub use hook::Hook;
pub use level::{accepted_levels, level_threshold, Level, ALL_LEVELS};
pub use value::{FieldValue, TypedStr};
