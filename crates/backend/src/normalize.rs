//! Normalization of raw backend hits into canonical scored documents
//!
//! Two responsibilities:
//!
//! 1. Deduplicate hits by their (title, page_number) identity. Multiple
//!    distinct storage identifiers can legitimately collapse to one logical
//!    page; the first occurrence in backend rank order wins and later
//!    duplicates are silently dropped.
//! 2. Recover the logical source-document identity from the per-chunk
//!    storage identifier by stripping its leading collection marker and
//!    trailing chunk/format marker.
//!
//! Output order is the deduplicated backend rank order, which downstream
//! rank-cutoff metrics depend on.

use crate::response::SearchResponse;
use rankeval_core::ScoredDocument;
use std::collections::HashSet;

/// Segment delimiter in composite storage identifiers
const DOC_ID_DELIMITER: char = '-';

/// Normalize one query's raw response into an ordered scored-document list
///
/// Note: first-seen wins on identity collisions, so a later duplicate with a
/// higher relevance score is dropped in favor of the earlier hit. Known
/// quality trade-off, kept for parity with the judged runs.
pub fn normalize(response: &SearchResponse, query_id: &str) -> Vec<ScoredDocument> {
    let mut seen: HashSet<(String, i64)> = HashSet::new();
    let mut result = Vec::new();

    for hit in &response.root.children {
        let identity = (hit.fields.title.clone(), hit.fields.page_number);
        if !seen.insert(identity) {
            continue;
        }

        result.push(ScoredDocument::new(
            query_id,
            derive_doc_id(&hit.fields.doc_id),
            hit.relevance,
        ));
    }

    result
}

/// Strip the leading collection marker and trailing chunk/format marker from
/// a composite identifier, rejoining the interior segments
///
/// `src-doc1-chunk0-fmt` -> `doc1-chunk0`; `a-b-c` -> `b`. Identifiers with
/// fewer than three segments have no interior and map to the empty string.
fn derive_doc_id(raw: &str) -> String {
    let parts: Vec<&str> = raw.split(DOC_ID_DELIMITER).collect();
    match parts.len() {
        0..=2 => String::new(),
        n => parts[1..n - 1].join("-"),
    }
}
