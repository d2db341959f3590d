//! Consultation Statistics
//!
//! Pure aggregation over a list of rendered results, for the admin
//! dashboard's consultation overview. No I/O, no state.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::{ConsultationType, Language, RenderedResult};

// ============================================================================
// Stats
// ============================================================================

/// Summary of a batch of rendered consultation answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationStats {
    /// Number of results aggregated.
    pub total_renders: usize,

    /// Result count per consultation type, keyed in order of first sighting.
    pub by_consultation_type: IndexMap<ConsultationType, usize>,

    /// Result count per output language.
    pub by_language: IndexMap<Language, usize>,

    /// Mean content length in characters, rounded to the nearest integer;
    /// 0 for an empty input.
    pub average_content_length: usize,

    /// Most recent render timestamp; `None` for an empty input.
    pub last_render_time: Option<DateTime<Utc>>,
}

/// Aggregate a batch of rendered results.
pub fn generate_stats(results: &[RenderedResult]) -> ConsultationStats {
    let mut by_consultation_type: IndexMap<ConsultationType, usize> = IndexMap::new();
    let mut by_language: IndexMap<Language, usize> = IndexMap::new();
    let mut total_chars = 0usize;
    let mut last_render_time: Option<DateTime<Utc>> = None;

    for result in results {
        *by_consultation_type
            .entry(result.metadata.consultation_type)
            .or_insert(0) += 1;
        *by_language.entry(result.metadata.language).or_insert(0) += 1;
        total_chars += result.content.chars().count();

        let rendered_at = result.metadata.rendered_at;
        if last_render_time.map_or(true, |seen| rendered_at > seen) {
            last_render_time = Some(rendered_at);
        }
    }

    let average_content_length = if results.is_empty() {
        0
    } else {
        (total_chars as f64 / results.len() as f64).round() as usize
    };

    ConsultationStats {
        total_renders: results.len(),
        by_consultation_type,
        by_language,
        average_content_length,
        last_render_time,
    }
}

// ============================================================================
// Tests
// ============================================================================
