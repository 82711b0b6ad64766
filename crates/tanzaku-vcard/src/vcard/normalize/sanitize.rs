//! Property sanitization.
//!
//! First stage of the pipeline: drops unusable records, coerces stray
//! scalar values to text, and repairs malformed structured addresses.
//! Never fails; repair is always attempted.

use tanzaku_core::constants::MAX_ADR_COMPONENTS;

use crate::vcard::core::{Property, RawProperty, RawValue, Value, names};

/// Keeps only usable properties, repairing what can be repaired.
///
/// - Records without a field or with an absent/empty value are dropped.
/// - Non-structured scalar values (dates, numbers, booleans) are
///   coerced to their text representation.
/// - An ADR value that arrived flat (text instead of components) is
///   split on commas, keeping the first six components.
///
/// Idempotent: re-running on its own output yields the same list.
#[tracing::instrument(skip(raw), fields(count = raw.len()))]
#[must_use]
pub fn sanitize_properties(raw: Vec<RawProperty>) -> Vec<Property> {
    let properties: Vec<Property> = raw.into_iter().filter_map(sanitize_one).collect();
    tracing::trace!(count = properties.len(), "Sanitized properties");
    properties
}

fn sanitize_one(raw: RawProperty) -> Option<Property> {
    let field = raw.field?.to_ascii_lowercase();
    let raw_value = raw.value?;
    if raw_value.is_empty() {
        return None;
    }

    let value = match raw_value {
        RawValue::Structured(components) => Value::Structured(components),
        other => {
            let text = other.into_text();
            if field == names::ADR {
                repair_address(&text)
            } else {
                Value::Text(text)
            }
        }
    };

    Some(Property {
        field,
        value,
        kind: raw.kind,
        group: raw.group,
        pref: raw.pref,
        first: raw.first,
    })
}

/// Rebuilds a flat ADR value into structured components.
///
/// Assumes the bad formatting used commas instead of semicolons. A
/// best-effort guess: an address legitimately containing a comma
/// inside one slot cannot be distinguished from a delimiter.
fn repair_address(value: &str) -> Value {
    let components: Vec<String> = value
        .split(',')
        .take(MAX_ADR_COMPONENTS)
        .map(str::to_string)
        .collect();
    tracing::trace!(count = components.len(), "Repaired flat ADR value");
    Value::Structured(components)
}
