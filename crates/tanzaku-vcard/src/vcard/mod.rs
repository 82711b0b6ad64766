//! Contact property pipeline.
//!
//! This module provides the data model and pure transformations for
//! vCard-style contact properties, as consumed by rendering, export,
//! and merge-detection collaborators.
//!
//! ## Overview
//!
//! A contact is an ordered list of [`Property`] records. Upstream
//! parsers deliver tolerant [`RawProperty`] records which the
//! pipeline turns into a canonical, internally-consistent list:
//!
//! ```rust
//! use tanzaku_vcard::vcard::{RawProperty, get_all_values, normalize_properties};
//!
//! let raw = vec![
//!     RawProperty::text("fn", "John Doe"),
//!     RawProperty::text("email", "john@example.com"),
//!     RawProperty::text("note", ""),
//!     RawProperty::text("email", "jd@example.com"),
//! ];
//!
//! let properties = normalize_properties(raw);
//! assert_eq!(properties.len(), 3); // empty note dropped
//! assert_eq!(properties[1].group.as_deref(), Some("item1"));
//!
//! let emails = get_all_values(&properties, "email");
//! assert_eq!(emails.len(), 2);
//! ```
//!
//! ## Guarantees
//!
//! Every function is pure and total: no I/O, no mutation of inputs,
//! no failure on malformed shapes. Input order is preserved; repeated
//! fields keep their user-intended position via freshly derived
//! preference ordinals.
//!
//! ## Submodules
//!
//! - [`core`] - Core types ([`Property`], [`RawProperty`], [`Value`])
//! - [`normalize`] - The sanitize/group/pref/first pipeline stages
//! - [`access`] - Ordered read-only accessors
//! - [`display`] - Display formatting helpers
//! - [`validate`] - Optional strict validation layer

pub mod access;
pub mod core;
pub mod display;
pub mod normalize;
pub mod validate;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use access::{export_basename, get_all_values, get_first_value};
pub use core::{Property, RawProperty, RawValue, Value, names};
pub use display::format_address;
pub use normalize::{
    add_group, add_pref, generate_new_group_name, mark_first, normalize_properties,
    sanitize_properties, sort_by_pref,
};
pub use validate::validate_properties;
