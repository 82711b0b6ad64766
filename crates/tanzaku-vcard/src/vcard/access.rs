//! Read-only accessors over normalized property lists.

use crate::vcard::core::{Property, Value, names};
use crate::vcard::normalize::{add_pref, sort_by_pref};

/// Returns the value of the first property with the given field.
///
/// Single linear scan; `None` when the field never appears.
#[must_use]
pub fn get_first_value<'a>(properties: &'a [Property], field: &str) -> Option<&'a Value> {
    properties.iter().find(|p| p.is_field(field)).map(|p| &p.value)
}

/// Returns all values for the given field, in preference order.
///
/// Preferences are derived fresh from positional order on a copy of
/// the input; pre-existing `pref` values are ignored and the caller's
/// list is never mutated. With freshly derived preferences the result
/// matches input order for that field.
#[must_use]
pub fn get_all_values(properties: &[Property], field: &str) -> Vec<Value> {
    let mut matching = add_pref(properties);
    matching.retain(|p| p.is_field(field));
    matching.sort_by(sort_by_pref);
    matching.into_iter().map(|p| p.value).collect()
}

/// Picks the basename for an exported `.vcf` file.
///
/// The first FN or EMAIL value in list order, flattened to text.
#[must_use]
pub fn export_basename(properties: &[Property]) -> Option<String> {
    properties
        .iter()
        .find(|p| p.is_field(names::FN) || p.is_field(names::EMAIL))
        .and_then(|p| p.value.first_text())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Property> {
        vec![
            Property::text("email", "x"),
            Property::text("tel", "1"),
            Property::text("email", "y"),
        ]
    }

    #[test]
    fn first_value_scans_in_order() {
        let props = sample();
        assert_eq!(
            get_first_value(&props, "tel"),
            Some(&Value::Text("1".to_string()))
        );
        assert_eq!(
            get_first_value(&props, "email"),
            Some(&Value::Text("x".to_string()))
        );
        assert_eq!(get_first_value(&props, "adr"), None);
    }

    #[test]
    fn all_values_keep_input_order() {
        let values = get_all_values(&sample(), "email");
        assert_eq!(
            values,
            vec![Value::Text("x".to_string()), Value::Text("y".to_string())]
        );
    }

    #[test]
    fn all_values_ignore_stale_prefs() {
        let mut props = sample();
        props[0].pref = Some(9);
        let values = get_all_values(&props, "email");
        assert_eq!(
            values,
            vec![Value::Text("x".to_string()), Value::Text("y".to_string())]
        );
        // caller's list untouched
        assert_eq!(props[0].pref, Some(9));
        assert_eq!(props[2].pref, None);
    }

    #[test]
    fn all_values_empty_for_missing_field() {
        assert!(get_all_values(&sample(), "adr").is_empty());
    }

    #[test]
    fn export_basename_prefers_first_match() {
        let props = vec![
            Property::text("note", "hi"),
            Property::text("email", "a@b.c"),
            Property::text("fn", "John Doe"),
        ];
        assert_eq!(export_basename(&props), Some("a@b.c".to_string()));
        assert_eq!(export_basename(&[]), None);
    }
}
