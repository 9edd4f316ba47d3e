//! Mode-specific query formulation
//!
//! Translates a query string and a [`RetrievalMode`] into the structured
//! YQL-style request posted to the search backend. Pure construction, no I/O.

use rankeval_core::RetrievalMode;
use serde::{Deserialize, Serialize};

/// Per-field candidate-retrieval cap for both the lexical and the
/// nearest-neighbor ranking clauses. Fixed, independent of the externally
/// requested result count, to bound backend candidate-generation cost.
const TARGET_HITS: usize = 100;

/// Embedding input binding attached for dense and hybrid requests. The
/// binding is resolved by the backend; this side only references it.
const QUERY_EMBEDDING_INPUT: &str = "embed(@query)";

/// Structured retrieval request in the backend's wire shape
///
/// Constructed fresh per query via [`SearchRequest::formulate`]; never
/// mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub yql: String,
    pub query: String,
    pub ranking: String,
    pub hits: usize,
    pub language: String,
    /// Present iff mode is dense or hybrid
    #[serde(rename = "input.query(e)", skip_serializing_if = "Option::is_none")]
    pub query_embedding: Option<String>,
}

impl SearchRequest {
    /// Build the mode-specific retrieval request for one query
    ///
    /// Every mode filters candidates to documents whose text-format field
    /// equals `format`; the ranking clause varies by mode.
    pub fn formulate(
        query: &str,
        mode: RetrievalMode,
        ranking: &str,
        hits: usize,
        language: &str,
        format: &str,
    ) -> Self {
        let format_filter = format!("text_format contains \"{format}\"");
        let yql = match mode {
            RetrievalMode::Sparse => format!(
                "select * from doc where {format_filter} and \
                 ({{targetHits:{TARGET_HITS}}}userInput(@query))"
            ),
            RetrievalMode::Dense => format!(
                "select * from doc where {format_filter} and \
                 ({{targetHits:{TARGET_HITS}}}nearestNeighbor(embedding, e))"
            ),
            RetrievalMode::Hybrid => format!(
                "select * from doc where {format_filter} and \
                 (({{targetHits:{TARGET_HITS}}}nearestNeighbor(embedding,e)) or \
                 ({{targetHits:{TARGET_HITS}}}userInput(@query)))"
            ),
        };

        let query_embedding = match mode {
            RetrievalMode::Dense | RetrievalMode::Hybrid => {
                Some(QUERY_EMBEDDING_INPUT.to_string())
            }
            RetrievalMode::Sparse => None,
        };

        Self {
            yql,
            query: query.to_string(),
            ranking: ranking.to_string(),
            hits,
            language: language.to_string(),
            query_embedding,
        }
    }
}
