//! End-to-end consultation rendering flow.
//!
//! Exercises the public surface the chat and authoring UIs consume: context
//! building, rendering with the builtin template set, preview fallback,
//! batch rendering, validation, search, and stats.

use rstest::rstest;

use tuvan::consultation::{
    generate_preview, generate_stats, render, render_all, search_consultation_content,
    validate_template, ConsultationType, Language, RenderContext, RenderedResult, TemplateSet,
};

fn coconut_oil_context(consultation_type: ConsultationType) -> RenderContext {
    RenderContext::builder("sp-101", "Dầu dừa nguyên chất")
        .category_name("Chăm sóc da")
        .consultation_type(consultation_type)
        .data_field("tên_sản_phẩm", "dầu dừa nguyên chất")
        .data_field("cách_dùng", "thoa một lớp mỏng lên da")
        .data_field("tần_suất", "hai lần mỗi ngày")
        .data_field("lưu_ý", "tránh vùng mắt")
        .data_field("công_dụng", "dưỡng ẩm và làm mềm da")
        .data_field("đối_tượng", "da khô và da thường")
        .data_field("cách_bảo_quản", "nơi khô ráo, tránh ánh nắng")
        .data_field("hạn_sử_dụng", "24 tháng kể từ ngày sản xuất")
        .build()
}

#[test]
fn renders_usage_guide_from_builtin_set() {
    let context = coconut_oil_context(ConsultationType::UsageGuide);
    let result = render(&context).unwrap();

    assert!(result.content.starts_with("Hướng dẫn sử dụng"));
    assert!(result.content.contains("Thoa một lớp mỏng lên da"));
    assert!(result.content.contains("Hai lần mỗi ngày"));
    assert!(!result.content.contains("{{"));

    assert_eq!(result.metadata.product_id, "sp-101");
    assert_eq!(result.metadata.consultation_type, ConsultationType::UsageGuide);
    assert_eq!(result.metadata.language, Language::Vietnamese);
    assert_eq!(result.template_used, context.templates.get(ConsultationType::UsageGuide).unwrap());
}

#[test]
fn unresolved_fields_surface_as_markers() {
    // Recipe fields were never supplied for this product.
    let context = coconut_oil_context(ConsultationType::Recipe);
    let result = render(&context).unwrap();

    assert!(result.content.contains("[Chưa có thông tin: nguyên_liệu]"));
    assert!(result.content.contains("[Chưa có thông tin: cách_làm]"));
    // The placeholder list reports unresolved names too.
    assert!(result.placeholders.contains(&"nguyên_liệu".to_string()));
}

#[test]
fn preview_recovers_from_missing_template() {
    let context = RenderContext::builder("sp-102", "Trà gừng")
        .templates(TemplateSet::new())
        .build();

    let preview = generate_preview(&context);
    assert!(preview.contains("Không thể tạo nội dung tư vấn"));
    assert!(preview.contains("usage_guide"));
}

#[test]
fn batch_render_isolates_missing_templates() {
    let mut templates = TemplateSet::new();
    templates.insert(ConsultationType::UsageGuide, "Dùng: {{cách_dùng}}.");
    templates.insert(ConsultationType::Storage, "Giữ: {{cách_bảo_quản}}.");

    let base = RenderContext::builder("sp-103", "Mật ong rừng")
        .templates(templates)
        .data_field("cách_dùng", "pha với nước ấm")
        .data_field("cách_bảo_quản", "đậy kín nắp")
        .build();

    let types = [
        ConsultationType::UsageGuide,
        ConsultationType::Troubleshooting,
        ConsultationType::Storage,
    ];
    let results = render_all(&base, &types);

    assert_eq!(results.len(), 3);
    assert_eq!(results[&ConsultationType::UsageGuide].content, "Dùng: Pha với nước ấm.");
    assert_eq!(results[&ConsultationType::Storage].content, "Giữ: Đậy kín nắp.");

    let failed = &results[&ConsultationType::Troubleshooting];
    assert!(!failed.content.is_empty());
    assert!(failed.template_used.is_empty());
    assert!(failed.placeholders.is_empty());
}

#[rstest]
#[case::clean("Xin chào {{ten}}", true, 0, 1)]
#[case::mismatched_braces("{{ten} ", false, 1, 1)]
#[case::empty("", false, 1, 0)]
#[case::whitespace_only("   ", false, 1, 0)]
fn validation_cases(
    #[case] template: &str,
    #[case] expect_valid: bool,
    #[case] expect_errors: usize,
    #[case] expect_warnings: usize,
) {
    let report = validate_template(template, &[] as &[&str]);

    assert_eq!(report.is_valid, expect_valid);
    assert_eq!(report.errors.len(), expect_errors);
    assert_eq!(report.warnings.len(), expect_warnings);
}

#[test]
fn search_and_stats_over_rendered_batch() {
    let base = coconut_oil_context(ConsultationType::UsageGuide);
    let types = [
        ConsultationType::UsageGuide,
        ConsultationType::Benefits,
        ConsultationType::Storage,
    ];
    let batch = render_all(&base, &types);
    let results: Vec<RenderedResult> = batch.values().cloned().collect();

    // Unaccented query finds the storage answer.
    let hits = search_consultation_content(&results, "kho rao");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].metadata.consultation_type, ConsultationType::Storage);

    // Empty query keeps everything, order intact.
    let all = search_consultation_content(&results, "");
    assert_eq!(all.len(), results.len());

    let stats = generate_stats(&results);
    assert_eq!(stats.total_renders, 3);
    assert_eq!(stats.by_language[&Language::Vietnamese], 3);
    assert_eq!(stats.by_consultation_type.len(), 3);
    assert!(stats.average_content_length > 0);
    assert!(stats.last_render_time.is_some());
}

#[test]
fn stats_on_empty_batch() {
    let stats = generate_stats(&[]);
    assert_eq!(stats.average_content_length, 0);
    assert!(stats.last_render_time.is_none());
}
