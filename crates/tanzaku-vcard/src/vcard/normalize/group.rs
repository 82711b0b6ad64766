//! Synthetic group tags.
//!
//! Every email property carries a group tag so per-address metadata
//! (encryption preference, scheme) can point at a specific address.
//! Tags use the `item<N>` convention shared with vCard clients.

use tanzaku_core::constants::GROUP_NAME_PREFIX;

use crate::vcard::core::{Property, names};

/// Generates the smallest unused `item<N>` group name.
///
/// N starts at 1; the search is bounded by the size of the used set
/// plus one, so it always terminates.
#[must_use]
pub fn generate_new_group_name<S: AsRef<str>>(existing_groups: &[S]) -> String {
    let mut index: usize = 1;
    loop {
        let candidate = format!("{GROUP_NAME_PREFIX}{index}");
        if !existing_groups.iter().any(|g| g.as_ref() == candidate) {
            return candidate;
        }
        index += 1;
    }
}

/// Attaches a fresh group tag to every email property lacking one.
///
/// Pre-existing tags on any property are left untouched and count as
/// used names, so synthesized tags never collide with them or with
/// each other.
#[tracing::instrument(skip(properties), fields(count = properties.len()))]
#[must_use]
pub fn add_group(properties: &[Property]) -> Vec<Property> {
    let mut used_groups: Vec<String> = properties
        .iter()
        .filter_map(|p| p.group.clone())
        .collect();

    properties
        .iter()
        .map(|property| {
            if !property.is_field(names::EMAIL) || property.group.is_some() {
                return property.clone();
            }

            let group = generate_new_group_name(&used_groups);
            tracing::trace!(group = %group, "Generated group tag for email property");
            used_groups.push(group.clone());

            let mut property = property.clone();
            property.group = Some(group);
            property
        })
        .collect()
}
