//! Wire types for the backend's search response
//!
//! Only the fields the normalizer consumes are modeled; the raw JSON body is
//! logged verbatim upstream, so nothing is lost by ignoring the rest here.

use serde::Deserialize;

/// Top-level search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub root: ResponseRoot,
}

/// Root node carrying the hit list
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseRoot {
    /// Hits in backend ranking order; absent when the result set is empty
    #[serde(default)]
    pub children: Vec<RawHit>,
}

/// One backend hit, prior to normalization
#[derive(Debug, Clone, Deserialize)]
pub struct RawHit {
    /// Backend relevance score; defaults to 0 when the backend omits it
    #[serde(default)]
    pub relevance: f64,
    pub fields: HitFields,
}

/// Document fields attached to a hit
#[derive(Debug, Clone, Deserialize)]
pub struct HitFields {
    /// Composite per-chunk storage identifier
    pub doc_id: String,
    pub title: String,
    pub page_number: i64,
}
