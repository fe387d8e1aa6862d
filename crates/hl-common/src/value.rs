//! Field values attached to log events.
//!
//! A field can hold native text, text carried under a domain type name, an
//! object that renders itself through `Display`, nothing at all, or any other
//! JSON-representable value. Hooks that need to inspect a value as text go
//! through [`FieldValue::text`], which applies a fixed precedence and never
//! renders through a nil indirection.

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Text carried under a domain type name, e.g. an `Email` or `Hostname`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedStr {
    type_name: Cow<'static, str>,
    value: String,
}

impl TypedStr {
    pub fn new(type_name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for TypedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Value of a single log field.
#[derive(Clone)]
pub enum FieldValue {
    /// No value.
    Null,
    /// Native text.
    Str(String),
    /// Text under a domain type name.
    Typed(TypedStr),
    /// An object that renders itself as text, held through a nilable
    /// indirection. `None` is a nil indirection and is never rendered.
    Display(Option<Arc<dyn fmt::Display + Send + Sync>>),
    /// Anything else: numbers, booleans, arrays, objects.
    Json(serde_json::Value),
}

impl FieldValue {
    /// Wrap an object that renders itself through `Display`.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        FieldValue::Display(Some(Arc::new(value)))
    }

    /// Wrap an optional stringable object; `None` becomes a nil indirection.
    pub fn display_opt<T>(value: Option<T>) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        FieldValue::Display(
            value.map(|v| Arc::new(v) as Arc<dyn fmt::Display + Send + Sync>),
        )
    }

    /// Whether the value is absent, including a nil indirection.
    pub fn is_nil(&self) -> bool {
        matches!(
            self,
            FieldValue::Null | FieldValue::Display(None) | FieldValue::Json(serde_json::Value::Null)
        )
    }

    /// Borrow the value if it is native text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Text form of the value, or `None` when there is nothing to render.
    ///
    /// Precedence: native text, then typed text, then the `Display` rendering
    /// of a stringable object (only when its indirection is not nil), then the
    /// generic JSON rendering.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Null => None,
            FieldValue::Str(s) => Some(Cow::Borrowed(s)),
            FieldValue::Typed(t) => Some(Cow::Borrowed(t.as_str())),
            FieldValue::Display(None) => None,
            FieldValue::Display(Some(d)) => Some(Cow::Owned(d.to_string())),
            FieldValue::Json(serde_json::Value::Null) => None,
            FieldValue::Json(serde_json::Value::String(s)) => Some(Cow::Borrowed(s)),
            FieldValue::Json(other) => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("Null"),
            FieldValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            FieldValue::Typed(t) => f.debug_tuple("Typed").field(t).finish(),
            FieldValue::Display(None) => f.write_str("Display(nil)"),
            FieldValue::Display(Some(d)) => {
                f.debug_tuple("Display").field(&d.to_string()).finish()
            }
            FieldValue::Json(v) => f.debug_tuple("Json").field(v).finish(),
        }
    }
}

// Stringable objects compare by their rendering.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Str(a), FieldValue::Str(b)) => a == b,
            (FieldValue::Typed(a), FieldValue::Typed(b)) => a == b,
            (FieldValue::Display(None), FieldValue::Display(None)) => true,
            (FieldValue::Display(Some(a)), FieldValue::Display(Some(b))) => {
                a.to_string() == b.to_string()
            }
            (FieldValue::Json(a), FieldValue::Json(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null | FieldValue::Display(None) => serializer.serialize_none(),
            FieldValue::Str(s) => serializer.serialize_str(s),
            FieldValue::Typed(t) => serializer.serialize_str(t.as_str()),
            FieldValue::Display(Some(d)) => serializer.collect_str(d),
            FieldValue::Json(v) => v.serialize(serializer),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<TypedStr> for FieldValue {
    fn from(t: TypedStr) -> Self {
        FieldValue::Typed(t)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Json(v)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Json(b.into())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Json(n.into())
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Json(n.into())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Json(n.into())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}
