//! Property-based tests for the extraction pipeline
//!
//! These tests ensure that:
//! - every stage is total (no panics on arbitrary text)
//! - canonical labels built from known components and materials are fixed points
//! - components come out in the order they were written

use garment_label::label::grammar::match_materials;
use garment_label::label::segment::segment;
use garment_label::{extract, normalize, parse_label};
use proptest::prelude::*;

/// Component names the rewrite table leaves untouched
fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("shell"),
        Just("lining"),
        Just("gusset"),
        Just("pocket"),
        Just("outer"),
        Just("filling"),
        Just("cup_shell"),
        Just("front_panel"),
    ]
    .prop_map(str::to_string)
}

/// Materials the rewrite table leaves untouched
fn material_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("cotton"),
        Just("polyester"),
        Just("polyamide"),
        Just("elastane"),
        Just("spandex"),
        Just("viscose"),
        Just("recycled nylon"),
        Just("wool"),
        Just("silk"),
    ]
    .prop_map(str::to_string)
}

/// Whole and one-decimal proportions
fn proportion_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..=100).prop_map(|n| n.to_string()),
        (1u32..=99, 1u32..=9).prop_map(|(n, d)| format!("{}.{}", n, d)),
    ]
}

fn item_strategy() -> impl Strategy<Value = String> {
    (proportion_strategy(), material_strategy()).prop_map(|(p, m)| format!("{}% {}", p, m))
}

/// A canonical label with distinct components
fn canonical_label_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec(
        (component_strategy(), prop::collection::vec(item_strategy(), 1..4)),
        1..4,
    )
    .prop_map(|blocks| {
        let mut seen = Vec::new();
        let mut parts = Vec::new();
        for (component, items) in blocks {
            if seen.contains(&component) {
                continue;
            }
            parts.push(format!("{}: {}", component, items.join(" ")));
            seen.push(component);
        }
        (seen, parts.join(" "))
    })
}

proptest! {
    #[test]
    fn test_stages_never_panic(text in "\\PC{0,80}") {
        let canonical = normalize(&text);
        let _ = segment(&canonical);
        let _ = match_materials(&text);
        let _ = parse_label(&text);
    }

    #[test]
    fn test_normalize_output_is_trimmed(text in "[ a-z0-9%:/()\\-,;.]{0,60}") {
        let canonical = normalize(&text);
        prop_assert_eq!(canonical.trim(), canonical.as_str());
    }

    #[test]
    fn test_canonical_labels_are_fixed_points((_, label) in canonical_label_strategy()) {
        prop_assert_eq!(normalize(&label), label);
    }

    #[test]
    fn test_component_order_is_preserved((components, label) in canonical_label_strategy()) {
        let record = parse_label(&label);
        let names: Vec<_> = record.components().map(str::to_string).collect();
        prop_assert_eq!(names, components);
    }

    #[test]
    fn test_every_item_is_extracted(items in prop::collection::vec(item_strategy(), 1..6)) {
        let label = format!("shell: {}", items.join(" "));
        let record = extract(&label);
        prop_assert_eq!(record.get("shell").map(|m| m.len()), Some(items.len()));
    }

    #[test]
    fn test_proportions_are_numbers(n in 0u32..=100, d in 0u32..=99) {
        let records = match_materials(&format!("{}.{:02}% wool", n, d));
        prop_assert_eq!(records.len(), 1);
        let expected: f64 = format!("{}.{:02}", n, d).parse().unwrap();
        prop_assert_eq!(records[0].proportion, expected);
    }
}
