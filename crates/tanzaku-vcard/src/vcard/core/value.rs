//! Property value types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A canonical property value, as produced by the sanitizer.
///
/// Every field is single-valued text except ADR, which carries an
/// ordered list of caller-defined component slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Single text value.
    Text(String),
    /// Ordered structured components (ADR).
    Structured(Vec<String>),
}

impl Value {
    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Structured(_) => None,
        }
    }

    /// Returns the structured components if this is a structured value.
    #[must_use]
    pub fn components(&self) -> Option<&[String]> {
        match self {
            Self::Structured(parts) => Some(parts),
            Self::Text(_) => None,
        }
    }

    /// Returns the text value, or the first structured component.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Structured(parts) => parts.first().map(String::as_str),
        }
    }

    /// Returns whether the value holds no usable content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Structured(parts) => parts.is_empty(),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(parts: Vec<String>) -> Self {
        Self::Structured(parts)
    }
}

/// A raw property value as delivered by the external parser.
///
/// Upstream data is not trusted to be well-shaped: values arrive as
/// strings, component lists, or stray scalars (a date for BDAY, a
/// number from a lenient JSON source). The sanitizer coerces every
/// non-structured variant to its text representation.
///
/// Untagged deserialization accepts the string-or-array JSON shapes
/// directly; scalar variants are tried first so numbers and booleans
/// keep their type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Boolean scalar.
    Boolean(bool),
    /// Integer scalar.
    Integer(i64),
    /// Float scalar.
    Float(f64),
    /// Ordered structured components.
    Structured(Vec<String>),
    /// Text value.
    Text(String),
    /// Calendar date (BDAY, ANNIVERSARY), constructed programmatically.
    Date(NaiveDate),
    /// UTC timestamp (REV), constructed programmatically.
    Timestamp(DateTime<Utc>),
}

impl RawValue {
    /// Returns whether the value counts as absent.
    ///
    /// Empty strings and empty component lists are absent; scalars
    /// always carry content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Structured(parts) => parts.is_empty(),
            Self::Boolean(_) | Self::Integer(_) | Self::Float(_) | Self::Date(_)
            | Self::Timestamp(_) => false,
        }
    }

    /// Coerces the value to its text representation.
    ///
    /// Structured values join their components with commas; the
    /// sanitizer keeps those structured instead of going through here.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Boolean(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::Timestamp(t) => t.to_rfc3339(),
            Self::Structured(parts) => parts.join(","),
        }
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for RawValue {
    fn from(parts: Vec<String>) -> Self {
        Self::Structured(parts)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Text(s) => Self::Text(s),
            Value::Structured(parts) => Self::Structured(parts),
        }
    }
}
