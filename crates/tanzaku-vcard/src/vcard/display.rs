//! Display formatting for property values.

use crate::vcard::core::Value;

/// Formats an address value as a single line.
///
/// Joins non-empty components with ", " in slot order. Text values
/// (not yet repaired into components) are returned as-is.
#[must_use]
pub fn format_address(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::Structured(components) => components
            .iter()
            .filter(|c| !c.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_components() {
        let value = Value::Structured(vec![
            "123 Main St".to_string(),
            "Anytown".to_string(),
            "CA".to_string(),
        ]);
        assert_eq!(format_address(&value), "123 Main St, Anytown, CA");
    }

    #[test]
    fn skips_empty_components() {
        let value = Value::Structured(vec![
            String::new(),
            "Anytown".to_string(),
            String::new(),
            "USA".to_string(),
        ]);
        assert_eq!(format_address(&value), "Anytown, USA");
    }

    #[test]
    fn passes_text_through() {
        let value = Value::Text("somewhere".to_string());
        assert_eq!(format_address(&value), "somewhere");
    }
}
