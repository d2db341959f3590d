//! Property-based tests for placeholder resolution.
//!
//! Tests invariants:
//! - A template whose placeholders all resolve renders with no `{{`/`}}`
//!   remnants and no missing-value markers
//! - A placeholder with no data always surfaces as a marker naming the field
//! - Extracted placeholder lists are duplicate-free
//! - Rendered content is deterministic for fixed inputs

use std::collections::HashMap;

use proptest::prelude::*;

use crate::consultation::renderer::{extract_placeholders, render};
use crate::consultation::templates::TemplateSet;
use crate::consultation::types::{ConsultationType, RenderContext};

// ============================================================================
// Strategies
// ============================================================================

/// Field names in the Vietnamese snake_case convention (ASCII subset so
/// generated templates stay readable when shrunk).
fn arb_field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

/// Field values: mixed-case text with Vietnamese letters, no braces.
fn arb_field_value() -> impl Strategy<Value = String> {
    "[a-zA-Zàáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệđìíỉĩịòóỏõọôồốổỗộơờớởỡợ0-9 ]{1,30}"
        .prop_filter("non-blank", |v| !v.trim().is_empty())
}

/// Distinct field names mapped to values.
fn arb_fields() -> impl Strategy<Value = HashMap<String, String>> {
    proptest::collection::hash_map(arb_field_name(), arb_field_value(), 1..5)
}

fn template_from(names: impl Iterator<Item = String>) -> String {
    let body = names
        .map(|name| format!("{{{{{name}}}}}"))
        .collect::<Vec<_>>()
        .join(" và ");
    format!("Thông tin: {body}.")
}

fn context_for(template: String, data: HashMap<String, String>) -> RenderContext {
    let mut templates = TemplateSet::new();
    templates.insert(ConsultationType::UsageGuide, template);
    RenderContext::builder("sp-prop", "Sản phẩm")
        .templates(templates)
        .consultation_data(data)
        .build()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Fully-resolvable templates leave no brace remnants or markers.
    #[test]
    fn prop_resolved_template_is_clean(fields in arb_fields()) {
        let template = template_from(fields.keys().cloned());
        let context = context_for(template, fields);

        let result = render(&context).unwrap();

        prop_assert!(!result.content.contains("{{"));
        prop_assert!(!result.content.contains("}}"));
        prop_assert!(!result.content.contains("[Chưa có thông tin:"));
        prop_assert!(!result.content.contains("[Missing:"));
    }

    /// A field with no data always surfaces as a marker naming the field.
    #[test]
    fn prop_missing_field_is_marked(name in arb_field_name()) {
        let template = format!("Thông tin: {{{{{name}}}}}.");
        let context = context_for(template, HashMap::new());

        let result = render(&context).unwrap();

        prop_assert!(
            result.content.contains(&format!("[Chưa có thông tin: {name}]")),
            "marker for '{}' missing in '{}'",
            name,
            result.content
        );
    }

    /// Extraction never reports the same name twice, however often it occurs.
    #[test]
    fn prop_extraction_is_duplicate_free(
        name in arb_field_name(),
        repeats in 1usize..6,
    ) {
        let template = vec![format!("{{{{{name}}}}}"); repeats].join(" ");
        let names = extract_placeholders(&template);

        prop_assert_eq!(names.iter().filter(|n| **n == name).count(), 1);
        prop_assert_eq!(names.len(), 1);
    }

    /// Same context renders the same content (timestamps aside).
    #[test]
    fn prop_render_is_deterministic(fields in arb_fields()) {
        let template = template_from(fields.keys().cloned());
        let context = context_for(template, fields);

        let first = render(&context).unwrap();
        let second = render(&context).unwrap();

        prop_assert_eq!(first.content, second.content);
        prop_assert_eq!(first.placeholders, second.placeholders);
    }
}
