//! The property normalization pipeline.
//!
//! Independent, composable pure functions applied in sequence to a
//! property list:
//!
//! 1. [`sanitize_properties`] — drops empty values, coerces stray
//!    scalars to text, repairs malformed addresses.
//! 2. [`add_group`] — gives every email property a unique group tag.
//! 3. [`add_pref`] — assigns 1-based preference ordinals to repeated
//!    fields (applied on demand by the accessors).
//! 4. [`mark_first`] — flags the first occurrence of each field for
//!    label rendering.
//!
//! All functions are deterministic, hold no state, and return new
//! lists; inputs are never mutated.

pub mod first;
pub mod group;
pub mod pref;
pub mod sanitize;

pub use first::mark_first;
pub use group::{add_group, generate_new_group_name};
pub use pref::{add_pref, sort_by_pref};
pub use sanitize::sanitize_properties;

use crate::vcard::core::{Property, RawProperty};

/// Runs the full normalization pipeline on a raw property list.
///
/// Sanitize, then assign group tags, then mark first occurrences —
/// the order the contact view applies before rendering. Preference
/// ordinals are derived on demand by the accessors instead.
#[tracing::instrument(skip(raw), fields(count = raw.len()))]
#[must_use]
pub fn normalize_properties(raw: Vec<RawProperty>) -> Vec<Property> {
    let sanitized = sanitize_properties(raw);
    let grouped = add_group(&sanitized);
    mark_first(&grouped)
}
