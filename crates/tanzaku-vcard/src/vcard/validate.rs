//! Strict validation over normalized property lists.
//!
//! The pipeline itself never rejects input; callers that need strict
//! policy layer it here. Every list produced by
//! [`crate::vcard::normalize::normalize_properties`] passes.

use std::collections::{HashMap, HashSet};

use tanzaku_core::constants::MAX_ADR_COMPONENTS;
use tanzaku_core::{CoreError, CoreResult, FieldKind};

use crate::vcard::core::{Property, names};

/// Checks a property list against the pipeline invariants.
///
/// Rejects empty values, ADR values with more than six components,
/// duplicate group tags among email properties, and `pref` runs that
/// are not contiguous from 1 in list order.
///
/// ## Errors
/// Returns [`CoreError::Validation`] naming the first violation.
pub fn validate_properties(properties: &[Property]) -> CoreResult<()> {
    let mut email_groups: HashSet<&str> = HashSet::new();
    let mut pref_runs: HashMap<FieldKind, u32> = HashMap::new();

    for property in properties {
        if property.value.is_empty() {
            return Err(CoreError::Validation(format!(
                "empty value for field '{}'",
                property.field
            )));
        }

        if property.is_field(names::ADR)
            && let Some(components) = property.value.components()
            && components.len() > MAX_ADR_COMPONENTS
        {
            return Err(CoreError::Validation(format!(
                "adr value has {} components, at most {MAX_ADR_COMPONENTS} allowed",
                components.len()
            )));
        }

        if property.is_field(names::EMAIL)
            && let Some(group) = property.group.as_deref()
            && !email_groups.insert(group)
        {
            return Err(CoreError::Validation(format!(
                "duplicate group tag '{group}' among email properties"
            )));
        }

        if let (Some(kind), Some(pref)) = (property.tracked_kind(), property.pref) {
            let expected = pref_runs.entry(kind).or_insert(0);
            *expected += 1;
            if pref != *expected {
                return Err(CoreError::Validation(format!(
                    "{kind} pref {pref} out of sequence, expected {expected}"
                )));
            }
        }
    }

    Ok(())
}
