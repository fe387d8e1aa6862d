//! Log events handed to hooks before dispatch.

use crate::{FieldValue, Level};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Named contextual values attached to a log event.
pub type Fields = HashMap<String, FieldValue>;

/// A single log event: severity, timestamp, message and fields.
///
/// The framework owns the event; hooks receive it by mutable reference for the
/// duration of one call and change it in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    pub level: Level,
    pub time: DateTime<Utc>,
    pub message: String,
    pub fields: Fields,
}

impl LogEvent {
    /// Create an event with no fields, timestamped now.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            time: Utc::now(),
            message: message.into(),
            fields: Fields::new(),
        }
    }

    /// Add or replace a field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Merge a set of fields, replacing existing keys.
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}
