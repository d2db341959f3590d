//! Template Validation
//!
//! Authoring-time checks for template strings, surfaced as a report rather
//! than an error type: the authoring UI calls this on every edit for live
//! feedback, and only hard defects (brace mismatch, empty template) block
//! saving. Placeholders with no available field value still render (with
//! missing-value markers), so they are warnings, never errors.

use serde::{Deserialize, Serialize};

use super::renderer::extract_placeholders;

// ============================================================================
// Validation Report
// ============================================================================

/// Outcome of validating one template against the fields available for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateValidation {
    /// True iff `errors` is empty. Warnings never affect validity.
    pub is_valid: bool,

    /// Hard defects: the template should not be saved.
    pub errors: Vec<String>,

    /// Data-quality signals: the template renders, with markers.
    pub warnings: Vec<String>,

    /// Distinct placeholder names found in the template.
    pub placeholders: Vec<String>,
}

// ============================================================================
// Validate
// ============================================================================

/// Validate a template against the field names available for substitution.
///
/// Checks:
/// - `{` and `}` counts match (mismatch is an error),
/// - the template is not empty or whitespace-only (error),
/// - every placeholder has an available field (one warning per miss).
pub fn validate_template<S: AsRef<str>>(template: &str, available_fields: &[S]) -> TemplateValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if template.trim().is_empty() {
        errors.push("template is empty".to_string());
    }

    let open = template.chars().filter(|c| *c == '{').count();
    let close = template.chars().filter(|c| *c == '}').count();
    if open != close {
        errors.push(format!(
            "unbalanced braces: {open} opening vs {close} closing"
        ));
    }

    let placeholders = extract_placeholders(template);
    for name in &placeholders {
        let known = available_fields.iter().any(|field| field.as_ref() == name);
        if !known {
            warnings.push(format!("no value available for placeholder '{name}'"));
        }
    }

    TemplateValidation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        placeholders,
    }
}

// ============================================================================
// Tests
// ============================================================================
