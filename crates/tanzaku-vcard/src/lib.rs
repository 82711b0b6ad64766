//! Contact property pipeline.
//!
//! Pure transformations over vCard-style contact properties: tolerant
//! sanitization, preference ordinals, synthetic group tags, and
//! ordered accessors. Parsing and encoding of the vCard text format
//! live in the embedding application.

pub mod vcard;

pub use vcard::{
    Property, RawProperty, RawValue, Value, add_group, add_pref, export_basename, format_address,
    generate_new_group_name, get_all_values, get_first_value, mark_first, names,
    normalize_properties, sanitize_properties, sort_by_pref, validate_properties,
};
