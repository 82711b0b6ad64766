//! End-to-end pipeline behavior on realistic contact data.

use crate::vcard::core::{Property, RawProperty, RawValue, Value};
use crate::vcard::{
    add_pref, export_basename, format_address, get_all_values, get_first_value,
    normalize_properties, validate_properties,
};

fn realistic_contact() -> Vec<RawProperty> {
    vec![
        RawProperty::text("fn", "Jane Doe"),
        RawProperty {
            kind: Some("work".to_string()),
            ..RawProperty::text("email", "jane@corp.example")
        },
        RawProperty {
            kind: Some("home".to_string()),
            group: Some("item1".to_string()),
            ..RawProperty::text("email", "jane@example.com")
        },
        RawProperty::text("tel", "+1-555-555-0101"),
        RawProperty::text("tel", ""),
        // flat ADR from a malformed encoder
        RawProperty::text("adr", "123 Main St,Anytown,CA,12345,USA"),
        RawProperty::new(
            "adr",
            RawValue::Structured(vec![
                "1 Side Rd".to_string(),
                "Elsewhere".to_string(),
            ]),
        ),
        RawProperty::text("note", "met at the conference"),
    ]
}

#[test_log::test]
fn normalized_contact_satisfies_invariants() {
    let props = normalize_properties(realistic_contact());

    // the empty tel is gone, everything else survives
    assert_eq!(props.len(), 7);

    // every email carries a unique group; pre-existing item1 kept
    let email_groups: Vec<&str> = props
        .iter()
        .filter(|p| p.is_field("email"))
        .filter_map(|p| p.group.as_deref())
        .collect();
    assert_eq!(email_groups, vec!["item2", "item1"]);

    // both addresses are structured now
    assert!(
        props
            .iter()
            .filter(|p| p.is_field("adr"))
            .all(|p| p.value.components().is_some())
    );

    // strict layer agrees
    validate_properties(&add_pref(&props)).unwrap();
}

#[test_log::test]
fn accessors_follow_input_order() {
    let props = normalize_properties(realistic_contact());

    let emails = get_all_values(&props, "email");
    assert_eq!(
        emails,
        vec![
            Value::Text("jane@corp.example".to_string()),
            Value::Text("jane@example.com".to_string()),
        ]
    );

    assert_eq!(
        get_first_value(&props, "tel"),
        Some(&Value::Text("+1-555-555-0101".to_string()))
    );
}

#[test_log::test]
fn export_uses_display_name() {
    let props = normalize_properties(realistic_contact());
    assert_eq!(export_basename(&props), Some("Jane Doe".to_string()));
}

#[test]
fn repaired_address_formats_as_one_line() {
    let props = normalize_properties(realistic_contact());
    let adr = get_first_value(&props, "adr").unwrap();
    assert_eq!(
        format_address(adr),
        "123 Main St, Anytown, CA, 12345, USA"
    );
}

#[test]
fn json_shapes_from_external_parser_deserialize() {
    let json = r#"[
        {"field": "fn", "value": "Jane Doe"},
        {"field": "email", "value": "jane@example.com", "type": "home"},
        {"field": "adr", "value": ["", "", "123 Main St", "Anytown"]},
        {"field": "note", "value": ""}
    ]"#;
    let raw: Vec<RawProperty> = serde_json::from_str(json).unwrap();
    let props = normalize_properties(raw);

    assert_eq!(props.len(), 3);
    assert_eq!(props[1].kind.as_deref(), Some("home"));
    assert_eq!(props[2].value.components().map(|c| c.len()), Some(4));
}

#[test]
fn pref_counters_are_independent_per_kind() {
    let props = vec![
        Property::text("email", "x"),
        Property::text("tel", "1"),
        Property::text("email", "y"),
    ];
    let with_pref = add_pref(&props);
    let prefs: Vec<Option<u32>> = with_pref.iter().map(|p| p.pref).collect();
    assert_eq!(prefs, vec![Some(1), Some(1), Some(2)]);
}
