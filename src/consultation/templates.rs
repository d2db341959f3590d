//! Template Set
//!
//! Ordered mapping from consultation type to template text, plus the
//! built-in Vietnamese defaults used when a category has not authored its
//! own set.
//!
//! Templates are plain strings with two placeholder forms: double-brace
//! `{{field}}` (preferred, Vietnamese field-name convention) and
//! single-brace `{field}`. The set is insertion-ordered so authoring UIs
//! list templates stably.
//!
//! The JSON exchange form is a flat object keyed by the `snake_case`
//! consultation-type keys:
//!
//! ```json
//! { "usage_guide": "Cách dùng: {{cách_dùng}}.", "safety": "..." }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::errors::{RenderError, Result};
use super::types::ConsultationType;

// ============================================================================
// Template Set
// ============================================================================

/// Insertion-ordered template collection for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet {
    templates: IndexMap<ConsultationType, String>,
}

impl TemplateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Vietnamese defaults, covering every consultation type.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.insert(
            ConsultationType::UsageGuide,
            "Hướng dẫn sử dụng {{tên_sản_phẩm}}: {{cách_dùng}}. Tần suất: {{tần_suất}}. Lưu ý: {{lưu_ý}}.",
        );
        set.insert(
            ConsultationType::Safety,
            "Về độ an toàn của {{tên_sản_phẩm}}: {{mức_độ_an_toàn}}. Đối tượng nên tránh: {{đối_tượng_tránh}}. Cảnh báo: {{cảnh_báo}}.",
        );
        set.insert(
            ConsultationType::Recipe,
            "Công thức gợi ý với {{tên_sản_phẩm}}: {{nguyên_liệu}}. Cách thực hiện: {{cách_làm}}.",
        );
        set.insert(
            ConsultationType::Technical,
            "Thông số kỹ thuật của {{tên_sản_phẩm}}: {{thông_số}}. Thành phần: {{thành_phần}}. Xuất xứ: {{xuất_xứ}}.",
        );
        set.insert(
            ConsultationType::Benefits,
            "Công dụng chính của {{tên_sản_phẩm}}: {{công_dụng}}. Phù hợp với: {{đối_tượng}}.",
        );
        set.insert(
            ConsultationType::Care,
            "Chăm sóc cùng {{tên_sản_phẩm}}: {{cách_chăm_sóc}}. Nên kết hợp: {{sản_phẩm_kết_hợp}}.",
        );
        set.insert(
            ConsultationType::Storage,
            "Bảo quản {{tên_sản_phẩm}}: {{cách_bảo_quản}}. Hạn sử dụng: {{hạn_sử_dụng}}.",
        );
        set.insert(
            ConsultationType::HealthBenefits,
            "Lợi ích sức khỏe của {{tên_sản_phẩm}}: {{lợi_ích_sức_khỏe}}. Liều lượng khuyến nghị: {{liều_lượng}}.",
        );
        set.insert(
            ConsultationType::SkinBenefits,
            "Lợi ích cho da của {{tên_sản_phẩm}}: {{lợi_ích_cho_da}}. Loại da phù hợp: {{loại_da}}.",
        );
        set.insert(
            ConsultationType::CareInstructions,
            "Hướng dẫn chăm sóc sau khi dùng {{tên_sản_phẩm}}: {{các_bước_chăm_sóc}}. Tránh: {{điều_cần_tránh}}.",
        );
        set.insert(
            ConsultationType::Troubleshooting,
            "Nếu gặp vấn đề khi dùng {{tên_sản_phẩm}}: {{vấn_đề_thường_gặp}}. Cách xử lý: {{cách_xử_lý}}.",
        );
        set.insert(
            ConsultationType::Compatibility,
            "Khả năng kết hợp của {{tên_sản_phẩm}}: {{tương_thích_với}}. Không nên dùng cùng: {{không_tương_thích}}.",
        );
        set
    }

    /// Parse the JSON exchange form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(RenderError::template_set_parse)
    }

    /// Serialize to the JSON exchange form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(RenderError::template_set_parse)
    }

    /// Template for the given consultation type, if present.
    pub fn get(&self, consultation_type: ConsultationType) -> Option<&str> {
        self.templates.get(&consultation_type).map(String::as_str)
    }

    /// Insert or replace a template.
    pub fn insert(
        &mut self,
        consultation_type: ConsultationType,
        template: impl Into<String>,
    ) -> Option<String> {
        self.templates.insert(consultation_type, template.into())
    }

    /// Remove a template, returning it if present.
    pub fn remove(&mut self, consultation_type: ConsultationType) -> Option<String> {
        self.templates.shift_remove(&consultation_type)
    }

    /// Number of templates in the set.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when the set holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// True when the set holds a template for the given type.
    pub fn contains(&self, consultation_type: ConsultationType) -> bool {
        self.templates.contains_key(&consultation_type)
    }

    /// Iterate templates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ConsultationType, &str)> {
        self.templates.iter().map(|(ty, tpl)| (*ty, tpl.as_str()))
    }

    /// Merge another set into this one; the other set wins on conflict.
    pub fn merge(&mut self, other: TemplateSet) {
        for (ty, template) in other.templates {
            self.templates.insert(ty, template);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
