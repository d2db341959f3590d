//! Consultation Data Model
//!
//! Core data types for consultation rendering:
//! - `ConsultationType` enum covering the twelve advisory categories
//! - `Language` tag for output post-processing selection
//! - `RenderContext` (immutable per-request input bundle) with builder
//! - `RenderedResult` and its `RenderMetadata`
//!
//! Consultation data is an open string-to-string mapping, not a fixed
//! record type: field names are authored per product/category and new ones
//! must not require a schema change.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::RenderError;
use super::templates::TemplateSet;

// ============================================================================
// Consultation Type
// ============================================================================

/// The advisory categories a consultation answer can belong to.
///
/// Each category selects one template from the active `TemplateSet`.
/// The `snake_case` key is the storage/exchange form; `label()` is the
/// Vietnamese display form shown in the consultation UI and matched by
/// content search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationType {
    /// How to use the product day to day.
    UsageGuide,
    /// Safety notes and who should avoid the product.
    Safety,
    /// Recipes or preparation instructions involving the product.
    Recipe,
    /// Technical specification and ingredients.
    Technical,
    /// Main benefits of the product.
    Benefits,
    /// Care routine built around the product.
    Care,
    /// Storage conditions and shelf life.
    Storage,
    /// Health-specific benefits.
    HealthBenefits,
    /// Skin-specific benefits.
    SkinBenefits,
    /// Follow-up care instructions after use.
    CareInstructions,
    /// Common problems and how to resolve them.
    Troubleshooting,
    /// What the product can and cannot be combined with.
    Compatibility,
}

impl ConsultationType {
    /// Every consultation type, in canonical listing order.
    pub const ALL: [ConsultationType; 12] = [
        ConsultationType::UsageGuide,
        ConsultationType::Safety,
        ConsultationType::Recipe,
        ConsultationType::Technical,
        ConsultationType::Benefits,
        ConsultationType::Care,
        ConsultationType::Storage,
        ConsultationType::HealthBenefits,
        ConsultationType::SkinBenefits,
        ConsultationType::CareInstructions,
        ConsultationType::Troubleshooting,
        ConsultationType::Compatibility,
    ];

    /// The `snake_case` key used in storage and the template-set JSON form.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::UsageGuide => "usage_guide",
            Self::Safety => "safety",
            Self::Recipe => "recipe",
            Self::Technical => "technical",
            Self::Benefits => "benefits",
            Self::Care => "care",
            Self::Storage => "storage",
            Self::HealthBenefits => "health_benefits",
            Self::SkinBenefits => "skin_benefits",
            Self::CareInstructions => "care_instructions",
            Self::Troubleshooting => "troubleshooting",
            Self::Compatibility => "compatibility",
        }
    }

    /// Vietnamese display label, shown to shoppers and matched by search.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UsageGuide => "Hướng dẫn sử dụng",
            Self::Safety => "An toàn sử dụng",
            Self::Recipe => "Công thức sử dụng",
            Self::Technical => "Thông số kỹ thuật",
            Self::Benefits => "Công dụng",
            Self::Care => "Chăm sóc",
            Self::Storage => "Bảo quản",
            Self::HealthBenefits => "Lợi ích sức khỏe",
            Self::SkinBenefits => "Lợi ích cho da",
            Self::CareInstructions => "Hướng dẫn chăm sóc",
            Self::Troubleshooting => "Xử lý sự cố",
            Self::Compatibility => "Tương thích",
        }
    }

    /// Parse a `snake_case` key back into a consultation type.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.as_key() == key)
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for ConsultationType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| RenderError::unknown_consultation_type(s.trim()))
    }
}

// ============================================================================
// Language
// ============================================================================

/// Output language tag controlling post-processing.
///
/// Vietnamese mode runs full punctuation/spacing cleanup; English mode only
/// trims the ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Vietnamese output (default).
    #[default]
    Vietnamese,
    /// English output.
    English,
}

impl Language {
    /// The `snake_case` key used in metadata and stats.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Vietnamese => "vietnamese",
            Self::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

// ============================================================================
// Consultation Data
// ============================================================================

/// Open field-name to field-value mapping for one product's consultation
/// content (e.g. `"cách_thoa"` -> `"thoa đều lên da"`).
///
/// Keys are dynamic and domain-specific; there is deliberately no closed
/// schema here.
pub type ConsultationData = HashMap<String, String>;

// ============================================================================
// Render Context
// ============================================================================

/// Everything one render call needs, bundled once per request.
///
/// Constructed via [`RenderContext::builder`] and never mutated afterwards.
/// Template resolution reads `templates[consultation_type]`; placeholder
/// resolution reads only `consultation_data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    /// Product identifier carried into result metadata.
    pub product_id: String,

    /// Product display name.
    pub product_name: String,

    /// Category name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    /// Industry name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_name: Option<String>,

    /// Customer name, when the conversation identified one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Prior conversation text, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_history: Option<String>,

    /// Which template to render.
    pub consultation_type: ConsultationType,

    /// Field values resolved into the template.
    #[serde(default)]
    pub consultation_data: ConsultationData,

    /// The full template set for this product's category.
    #[serde(default)]
    pub templates: TemplateSet,

    /// Output language.
    #[serde(default)]
    pub language: Language,
}

impl RenderContext {
    /// Create a builder with the required product fields.
    pub fn builder(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
    ) -> RenderContextBuilder {
        RenderContextBuilder::new(product_id, product_name)
    }

    /// Copy of this context targeting a different consultation type.
    ///
    /// Used by `render_all` to iterate types against one base context.
    pub fn with_consultation_type(&self, consultation_type: ConsultationType) -> Self {
        Self {
            consultation_type,
            ..self.clone()
        }
    }
}

/// Builder for [`RenderContext`].
#[derive(Debug)]
pub struct RenderContextBuilder {
    context: RenderContext,
}

impl RenderContextBuilder {
    /// Create a new builder with required fields.
    ///
    /// Defaults: built-in template set, Vietnamese output, usage-guide type,
    /// empty consultation data.
    pub fn new(product_id: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            context: RenderContext {
                product_id: product_id.into(),
                product_name: product_name.into(),
                category_name: None,
                industry_name: None,
                customer_name: None,
                conversation_history: None,
                consultation_type: ConsultationType::UsageGuide,
                consultation_data: ConsultationData::new(),
                templates: TemplateSet::builtin(),
                language: Language::Vietnamese,
            },
        }
    }

    /// Set the category name.
    pub fn category_name(mut self, name: impl Into<String>) -> Self {
        self.context.category_name = Some(name.into());
        self
    }

    /// Set the industry name.
    pub fn industry_name(mut self, name: impl Into<String>) -> Self {
        self.context.industry_name = Some(name.into());
        self
    }

    /// Set the customer name.
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.context.customer_name = Some(name.into());
        self
    }

    /// Attach prior conversation text.
    pub fn conversation_history(mut self, history: impl Into<String>) -> Self {
        self.context.conversation_history = Some(history.into());
        self
    }

    /// Set the consultation type to render.
    pub fn consultation_type(mut self, consultation_type: ConsultationType) -> Self {
        self.context.consultation_type = consultation_type;
        self
    }

    /// Add one consultation data field.
    pub fn data_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.consultation_data.insert(name.into(), value.into());
        self
    }

    /// Replace the consultation data wholesale.
    pub fn consultation_data(mut self, data: ConsultationData) -> Self {
        self.context.consultation_data = data;
        self
    }

    /// Replace the template set.
    pub fn templates(mut self, templates: TemplateSet) -> Self {
        self.context.templates = templates;
        self
    }

    /// Set the output language.
    pub fn language(mut self, language: Language) -> Self {
        self.context.language = language;
        self
    }

    /// Finish building the context.
    pub fn build(self) -> RenderContext {
        self.context
    }
}

// ============================================================================
// Rendered Result
// ============================================================================

/// Metadata attached to one rendered consultation answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderMetadata {
    /// Product the answer was rendered for.
    pub product_id: String,

    /// Consultation type that selected the template.
    pub consultation_type: ConsultationType,

    /// When the render happened.
    pub rendered_at: DateTime<Utc>,

    /// Output language.
    pub language: Language,
}

/// One finished consultation answer.
///
/// Immutable once returned. `placeholders` lists every distinct field name
/// detected in the raw template (both bracket styles), whether or not it
/// resolved, in order of first appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResult {
    /// Finished prose for display.
    pub content: String,

    /// The raw template the content was merged from.
    pub template_used: String,

    /// Distinct placeholder names found in the template.
    pub placeholders: Vec<String>,

    /// Render metadata.
    pub metadata: RenderMetadata,
}

// ============================================================================
// Tests
// ============================================================================
