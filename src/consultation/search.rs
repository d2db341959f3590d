//! Consultation Content Search
//!
//! Diacritic-insensitive filtering over rendered consultation answers, for
//! the consultation UI's search box. Matching is delegated to
//! `text::vietnamese`, so "cach dung" finds "Cách dùng" and light typos
//! still hit via fuzzy token matching.

use crate::text::vietnamese;

use super::types::RenderedResult;

// ============================================================================
// Search
// ============================================================================

/// Filter rendered results down to those matching the query.
///
/// A result matches when its content or its consultation-type Vietnamese
/// label matches diacritic-insensitively. An empty or whitespace-only query
/// returns the full input, same length and order.
pub fn search_consultation_content<'a>(
    results: &'a [RenderedResult],
    query: &str,
) -> Vec<&'a RenderedResult> {
    if query.trim().is_empty() {
        return results.iter().collect();
    }

    let hits: Vec<&RenderedResult> = results
        .iter()
        .filter(|result| {
            vietnamese::matches(&result.content, query)
                || vietnamese::matches(result.metadata.consultation_type.label(), query)
        })
        .collect();

    tracing::debug!(
        query,
        total = results.len(),
        hits = hits.len(),
        "searched consultation content"
    );

    hits
}

/// Content of one result with every query occurrence wrapped in the given
/// marker pair, for hit highlighting in the UI.
pub fn highlight_content(result: &RenderedResult, query: &str, marker: &str) -> String {
    vietnamese::highlight(&result.content, query, marker)
}

// ============================================================================
// Tests
// ============================================================================
