//! Property-based tests for Vietnamese diacritic folding.
//!
//! Tests invariants:
//! - `normalize` is idempotent
//! - Normalized output carries no combining marks, no đ/Đ, no uppercase
//! - `matches` is reflexive
//! - `highlight` with an empty marker reproduces its input exactly

use proptest::prelude::*;
use unicode_normalization::char::is_combining_mark;

use crate::text::vietnamese::{highlight, matches, normalize};

// ============================================================================
// Strategies
// ============================================================================

/// Text mixing ASCII with accented Vietnamese letters and punctuation.
fn arb_vietnamese_text() -> impl Strategy<Value = String> {
    "[a-zA-Z àáảãạăằắẳẵặâầấẩẫậÀÁẢÃẠĐđèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵ,.!?]{0,60}"
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Folding twice changes nothing.
    #[test]
    fn prop_normalize_idempotent(text in arb_vietnamese_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Folded output is fully flattened: no marks, no đ, no uppercase.
    #[test]
    fn prop_normalize_output_is_flat(text in arb_vietnamese_text()) {
        let folded = normalize(&text);

        for c in folded.chars() {
            prop_assert!(!is_combining_mark(c), "combining mark {c:?} survived");
            prop_assert!(c != 'đ' && c != 'Đ', "đ survived folding");
            prop_assert!(!c.is_uppercase(), "uppercase {c:?} survived");
        }
    }

    /// Every string matches itself.
    #[test]
    fn prop_matches_reflexive(text in arb_vietnamese_text()) {
        prop_assert!(matches(&text, &text));
    }

    /// An empty marker makes highlighting the identity function.
    #[test]
    fn prop_highlight_empty_marker_is_identity(
        text in arb_vietnamese_text(),
        query in "[a-zà-ỹ]{0,10}",
    ) {
        prop_assert_eq!(highlight(&text, &query, ""), text);
    }
}
