//! Preference ordinals.
//!
//! Remembers user-intended ordering of repeated fields by assigning a
//! 1-based `pref` per tracked field kind, tied to input position.

use std::cmp::Ordering;
use std::collections::HashMap;

use tanzaku_core::FieldKind;

use crate::vcard::core::Property;

/// Assigns `pref` ordinals to email, tel, and adr properties.
///
/// One independent counter per tracked kind; each tracked property
/// gets the next value for its kind in list order. Properties of
/// other fields pass through unchanged.
#[must_use]
pub fn add_pref(properties: &[Property]) -> Vec<Property> {
    let mut counters: HashMap<FieldKind, u32> = HashMap::new();
    properties
        .iter()
        .map(|property| {
            let mut property = property.clone();
            if let Some(kind) = property.tracked_kind() {
                let counter = counters.entry(kind).or_insert(0);
                *counter += 1;
                property.pref = Some(*counter);
            }
            property
        })
        .collect()
}

/// Orders properties by ascending `pref`.
///
/// Equal or absent prefs compare `Equal`, so a stable sort keeps
/// their input order. A stability hint, not a strict total order.
#[must_use]
pub fn sort_by_pref(a: &Property, b: &Property) -> Ordering {
    match (a.pref, b.pref) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}
