//! Consultation Template Renderer
//!
//! Merges one template with field data into finished prose, with
//! Vietnamese-aware formatting. Processing order is fixed and matters for
//! output:
//!
//! 1. Replace all double-brace `{{field}}` placeholders.
//! 2. Replace all single-brace `{field}` placeholders.
//! 3. Run language-specific post-processing over the merged string.
//!
//! Every placeholder either resolves from consultation data or is replaced
//! by a visible missing-value marker, never silently dropped. The marker
//! wording differs between the two bracket styles (`[Chưa có thông tin: X]`
//! vs `[Missing: X]`); that asymmetry is observed product behavior and is
//! kept intact.
//!
//! `render` does not validate its template; authoring flows are expected to
//! run `validation::validate_template` before saving. All matchers are
//! compiled once and hold no scan-position state, so concurrent calls need
//! no coordination.

use chrono::Utc;
use indexmap::IndexMap;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::errors::{RenderError, Result};
use super::types::{
    ConsultationData, ConsultationType, Language, RenderContext, RenderMetadata, RenderedResult,
};

// ============================================================================
// Patterns
// ============================================================================

static DOUBLE_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("Invalid double-brace regex"));

static SINGLE_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("Invalid single-brace regex"));

static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([,.!?])").expect("Invalid punctuation-spacing regex"));

/// Uppercase letters of the accented Vietnamese alphabet, beyond A-Z.
const VIETNAMESE_UPPERCASE: &str =
    "ÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬÈÉẺẼẸÊỀẾỂỄỆÌÍỈĨỊÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢÙÚỦŨỤƯỪỨỬỮỰỲÝỶỸỴĐ";

static PUNCT_BEFORE_UPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("([.!?])([A-Z{VIETNAMESE_UPPERCASE}])"))
        .expect("Invalid sentence-boundary regex")
});

static MULTI_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" {2,}").expect("Invalid multi-space regex"));

/// Either placeholder style, double-brace tried first, for extraction in
/// true order of first appearance.
static ANY_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]+)\}\}|\{([^{}]+)\}").expect("Invalid placeholder regex"));

// ============================================================================
// Placeholder Extraction
// ============================================================================

/// Distinct placeholder names in a template, both bracket styles, in order
/// of first appearance. Names are trimmed; duplicates collapse to one entry.
pub fn extract_placeholders(template: &str) -> Vec<String> {
    let mut names: IndexSet<String> = IndexSet::new();
    for caps in ANY_PLACEHOLDER.captures_iter(template) {
        if let Some(name) = caps.get(1).or_else(|| caps.get(2)) {
            names.insert(name.as_str().trim().to_string());
        }
    }
    names.into_iter().collect()
}

// ============================================================================
// Field Value Formatting
// ============================================================================

/// Look up a field value, treating blank values as absent.
fn lookup<'a>(data: &'a ConsultationData, field: &str) -> Option<&'a str> {
    data.get(field).map(String::as_str).filter(|value| !value.trim().is_empty())
}

/// Per-value formatting applied before substitution: trim, collapse runs of
/// whitespace, collapse a duplicated terminal sentence mark, capitalize the
/// first character.
fn format_field_value(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    capitalize_first(&collapse_terminal_punctuation(&collapsed))
}

/// Collapse a trailing run of one repeated sentence mark ("quá tốt.." ->
/// "quá tốt.") so template punctuation never stacks a duplicate.
fn collapse_terminal_punctuation(value: &str) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    while chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        if matches!(last, '.' | '!' | '?') && chars[chars.len() - 2] == last {
            chars.pop();
        } else {
            break;
        }
    }
    chars.into_iter().collect()
}

/// Uppercase the first character, Unicode-aware (so "đều" -> "Đều").
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Post-processing
// ============================================================================

/// Language-specific cleanup of the fully merged string.
fn postprocess(text: &str, language: Language) -> String {
    match language {
        Language::Vietnamese => polish_vietnamese(text),
        Language::English => text.trim().to_string(),
    }
}

/// Vietnamese cleanup: no whitespace before `,.!?`, one space between a
/// sentence mark and an immediately following uppercase letter, single
/// spaces, trimmed ends. Newlines inside the template survive.
fn polish_vietnamese(text: &str) -> String {
    let tightened = SPACE_BEFORE_PUNCT.replace_all(text, "$1");
    let spaced = PUNCT_BEFORE_UPPER.replace_all(&tightened, "$1 $2");
    let collapsed = MULTI_SPACE.replace_all(&spaced, " ");
    collapsed.trim().to_string()
}

// ============================================================================
// Render
// ============================================================================

/// Merge the context's template with its consultation data.
///
/// Fails only when `context.templates` has no entry for
/// `context.consultation_type`. Malformed templates are not detected here
/// (see module docs); unresolved placeholders surface as inline markers.
pub fn render(context: &RenderContext) -> Result<RenderedResult> {
    let template = context
        .templates
        .get(context.consultation_type)
        .ok_or_else(|| RenderError::template_not_found(context.consultation_type.as_key()))?;

    let placeholders = extract_placeholders(template);

    let pass_one = DOUBLE_BRACE.replace_all(template, |caps: &Captures| {
        let field = caps[1].trim();
        match lookup(&context.consultation_data, field) {
            Some(value) => format_field_value(value),
            None => format!("[Chưa có thông tin: {field}]"),
        }
    });

    let pass_two = SINGLE_BRACE.replace_all(&pass_one, |caps: &Captures| {
        let field = caps[1].trim();
        match lookup(&context.consultation_data, field) {
            Some(value) => format_field_value(value),
            None => format!("[Missing: {field}]"),
        }
    });

    let content = postprocess(&pass_two, context.language);

    tracing::debug!(
        product_id = %context.product_id,
        consultation_type = %context.consultation_type,
        placeholders = placeholders.len(),
        "rendered consultation template"
    );

    Ok(RenderedResult {
        content,
        template_used: template.to_string(),
        placeholders,
        metadata: RenderMetadata {
            product_id: context.product_id.clone(),
            consultation_type: context.consultation_type,
            rendered_at: Utc::now(),
            language: context.language,
        },
    })
}

/// Render for preview surfaces that must never fail: on error the returned
/// string is a user-facing warning carrying the failure message.
pub fn generate_preview(context: &RenderContext) -> String {
    match render(context) {
        Ok(result) => result.content,
        Err(err) => {
            tracing::warn!(
                product_id = %context.product_id,
                consultation_type = %context.consultation_type,
                error = %err,
                "preview fell back to warning text"
            );
            format!("⚠️ Không thể tạo nội dung tư vấn: {err}")
        }
    }
}

/// Render several consultation types against one base context.
///
/// Failures are isolated per type: a failing entry yields a synthetic result
/// whose content is the error message, so one missing template never aborts
/// the rest of the batch.
pub fn render_all(
    base: &RenderContext,
    consultation_types: &[ConsultationType],
) -> IndexMap<ConsultationType, RenderedResult> {
    let mut results = IndexMap::with_capacity(consultation_types.len());

    for &consultation_type in consultation_types {
        let context = base.with_consultation_type(consultation_type);
        let result = match render(&context) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(
                    product_id = %base.product_id,
                    consultation_type = %consultation_type,
                    error = %err,
                    "batch entry failed, substituting error content"
                );
                RenderedResult {
                    content: err.to_string(),
                    template_used: String::new(),
                    placeholders: Vec::new(),
                    metadata: RenderMetadata {
                        product_id: base.product_id.clone(),
                        consultation_type,
                        rendered_at: Utc::now(),
                        language: base.language,
                    },
                }
            }
        };
        results.insert(consultation_type, result);
    }

    results
}

// ============================================================================
// Tests
// ============================================================================
