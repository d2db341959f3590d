//! Vietnamese Text Utilities
//!
//! Diacritic-insensitive primitives used by consultation search and hit
//! highlighting:
//! - `normalize`: case- and accent-folded form for comparisons
//! - `matches`: substring match on folded text, with a fuzzy token fallback
//!   so light typos still hit
//! - `highlight`: wrap folded-match spans in the original (accented) text
//!
//! Folding is NFD decomposition with combining marks stripped; `đ/Đ` has no
//! decomposition and is mapped to `d` explicitly. All functions are pure.

use strsim::jaro_winkler;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Minimum Jaro-Winkler similarity for a query token to fuzzy-match a
/// content token.
const FUZZY_THRESHOLD: f64 = 0.92;

// ============================================================================
// Folding
// ============================================================================

/// Fold one character: strip accents, lowercase, map đ/Đ to d.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    std::iter::once(c)
        .nfd()
        .filter(|d| !is_combining_mark(*d))
        .flat_map(|d| {
            let base = match d {
                'đ' => 'd',
                'Đ' => 'D',
                other => other,
            };
            base.to_lowercase()
        })
}

/// Accent- and case-folded form of a string, whitespace collapsed.
///
/// `"Cách  DÙNG  đều"` folds to `"cach dung deu"`.
pub fn normalize(input: &str) -> String {
    let folded: String = input.chars().flat_map(fold_char).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Matching
// ============================================================================

/// Diacritic-insensitive match of `query` against `haystack`.
///
/// True when the folded haystack contains the folded query as a substring,
/// or when every query token fuzzy-matches some haystack token (Jaro-Winkler
/// >= 0.92). An empty query matches everything.
pub fn matches(haystack: &str, query: &str) -> bool {
    let folded_query = normalize(query);
    if folded_query.is_empty() {
        return true;
    }

    let folded_haystack = normalize(haystack);
    if folded_haystack.contains(&folded_query) {
        return true;
    }

    folded_query.split(' ').all(|query_token| {
        folded_haystack
            .split(' ')
            .any(|token| jaro_winkler(query_token, token) >= FUZZY_THRESHOLD)
    })
}

// ============================================================================
// Highlighting
// ============================================================================

/// Folded view of a string keeping, per folded char, the byte offset of the
/// original char it came from. Whitespace is kept as-is (not collapsed) so
/// offsets stay exact.
fn fold_with_offsets(text: &str) -> (Vec<char>, Vec<usize>) {
    let mut folded = Vec::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len());
    for (offset, c) in text.char_indices() {
        for f in fold_char(c) {
            folded.push(f);
            offsets.push(offset);
        }
    }
    (folded, offsets)
}

/// Wrap every diacritic-insensitive occurrence of `query` in `text` with the
/// marker pair, preserving the original accented spelling of the match.
///
/// `highlight("Cách dùng dầu dừa", "cach dung", "**")` returns
/// `"**Cách dùng** dầu dừa"`. An empty query returns the text unchanged.
/// Non-overlapping, left-to-right.
pub fn highlight(text: &str, query: &str, marker: &str) -> String {
    let needle: Vec<char> = query.trim().chars().flat_map(fold_char).collect();
    if needle.is_empty() {
        return text.to_string();
    }

    let (folded, offsets) = fold_with_offsets(text);
    if needle.len() > folded.len() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + marker.len() * 4);
    let mut emitted = 0usize; // byte offset into `text`
    let mut i = 0usize;

    while i + needle.len() <= folded.len() {
        if folded[i..i + needle.len()] == needle[..] {
            let start = offsets[i];
            let last_char_start = offsets[i + needle.len() - 1];
            let end = last_char_start
                + text[last_char_start..]
                    .chars()
                    .next()
                    .map_or(0, char::len_utf8);

            out.push_str(&text[emitted..start]);
            out.push_str(marker);
            out.push_str(&text[start..end]);
            out.push_str(marker);

            emitted = end;
            // Skip folded chars belonging to already-emitted original bytes.
            i += needle.len();
            while i < folded.len() && offsets[i] < end {
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    out.push_str(&text[emitted..]);
    out
}

// ============================================================================
// Tests
// ============================================================================
