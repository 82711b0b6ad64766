//! Contact property types.

use serde::{Deserialize, Serialize};
use tanzaku_core::FieldKind;

use super::value::{RawValue, Value};

/// A contact property.
///
/// The atomic unit of the contact data model: one typed field/value
/// record, e.g. a single email address entry. Field names are an open
/// set; unknown fields pass through every pipeline stage unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Field name (normalized to lowercase, e.g. "email", "adr").
    pub field: String,
    /// The property value.
    pub value: Value,
    /// Optional sub-type qualifier (e.g. "home", "work").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
    /// Optional group tag correlating related properties.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub group: Option<String>,
    /// Display/send preference ordinal among same-field properties.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pref: Option<u32>,
    /// Marks the first occurrence of a field kind, for label rendering.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub first: Option<bool>,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into().to_ascii_lowercase(),
            value: Value::Text(value.into()),
            kind: None,
            group: None,
            pref: None,
            first: None,
        }
    }

    /// Creates a property with structured components (ADR).
    #[must_use]
    pub fn structured(field: impl Into<String>, components: Vec<String>) -> Self {
        Self {
            field: field.into().to_ascii_lowercase(),
            value: Value::Structured(components),
            kind: None,
            group: None,
            pref: None,
            first: None,
        }
    }

    /// Creates a property with a text value and group tag.
    #[must_use]
    pub fn grouped_text(
        group: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::text(field, value)
        }
    }

    /// Sets the sub-type qualifier.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Returns whether this property has the given field name.
    #[must_use]
    pub fn is_field(&self, field: &str) -> bool {
        self.field == field
    }

    /// Returns the tracked field kind, if this field carries a pref.
    #[must_use]
    pub fn tracked_kind(&self) -> Option<FieldKind> {
        FieldKind::from_field(&self.field)
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }
}

/// A raw property as delivered by the external parser.
///
/// Nothing is guaranteed: the field may be missing and the value may
/// be absent or mis-shaped. The sanitizer turns these into
/// [`Property`] records or drops them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawProperty {
    /// Field name, if present.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub field: Option<String>,
    /// Value, if present.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<RawValue>,
    /// Optional sub-type qualifier.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
    /// Optional group tag.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub group: Option<String>,
    /// Optional preference ordinal.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pref: Option<u32>,
    /// Optional first-occurrence marker.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub first: Option<bool>,
}

impl RawProperty {
    /// Creates a raw property with a field and value.
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            field: Some(field.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Creates a raw property with a text value.
    #[must_use]
    pub fn text(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, RawValue::Text(value.into()))
    }
}

impl From<Property> for RawProperty {
    fn from(property: Property) -> Self {
        Self {
            field: Some(property.field),
            value: Some(property.value.into()),
            kind: property.kind,
            group: property.group,
            pref: property.pref,
            first: property.first,
        }
    }
}

/// Common field names as constants.
pub mod names {
    // Identification
    pub const FN: &str = "fn";
    pub const N: &str = "n";
    pub const NICKNAME: &str = "nickname";
    pub const PHOTO: &str = "photo";
    pub const BDAY: &str = "bday";
    pub const ANNIVERSARY: &str = "anniversary";

    // Delivery addressing
    pub const ADR: &str = "adr";

    // Communications
    pub const TEL: &str = "tel";
    pub const EMAIL: &str = "email";

    // Organizational
    pub const TITLE: &str = "title";
    pub const ORG: &str = "org";
    pub const LOGO: &str = "logo";

    // Explanatory
    pub const CATEGORIES: &str = "categories";
    pub const NOTE: &str = "note";
    pub const URL: &str = "url";
    pub const UID: &str = "uid";

    // Security
    pub const KEY: &str = "key";
}
