//! First-occurrence markers.

use std::collections::HashSet;

use crate::vcard::core::Property;

/// Marks the first property of each field kind with `first = true`.
///
/// Label rendering shows the field label only once per kind; the
/// marker is recomputed from list order, so stale markers on later
/// occurrences are cleared.
#[must_use]
pub fn mark_first(properties: &[Property]) -> Vec<Property> {
    let mut seen: HashSet<&str> = HashSet::new();
    properties
        .iter()
        .map(|property| {
            let is_first = seen.insert(property.field.as_str());
            let mut property = property.clone();
            property.first = is_first.then_some(true);
            property
        })
        .collect()
}
