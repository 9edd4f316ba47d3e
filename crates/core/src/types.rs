//! Shared types for retrieval evaluation
//!
//! These types form the contract between the backend client, the result
//! normalizer, and the metric aggregator.

use serde::{Deserialize, Serialize};

/// Retrieval mode selecting the query-construction policy for a run
///
/// Selected once per run; determines which ranking clauses the query
/// formulator emits and whether an embedding input binding is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalMode {
    /// Lexical text match over the query string
    Sparse,
    /// Nearest-neighbor match against a precomputed embedding field
    Dense,
    /// Logical OR of the dense and sparse ranking clauses
    Hybrid,
}

impl RetrievalMode {
    /// Parse one of the literal mode tokens accepted on the command line
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "sparse" => Some(Self::Sparse),
            "dense" => Some(Self::Dense),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

impl std::fmt::Display for RetrievalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sparse => write!(f, "sparse"),
            Self::Dense => write!(f, "dense"),
            Self::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// Canonical scored-document triple consumed by the metric aggregator
///
/// `doc_id` is the logical source-document identity recovered from the
/// backend's per-chunk storage identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub query_id: String,
    pub doc_id: String,
    pub relevance: f64,
}

impl ScoredDocument {
    pub fn new(query_id: impl Into<String>, doc_id: impl Into<String>, relevance: f64) -> Self {
        Self {
            query_id: query_id.into(),
            doc_id: doc_id.into(),
            relevance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mode_tokens_parse_case_insensitively() {
        assert_eq!(RetrievalMode::parse_token("sparse"), Some(RetrievalMode::Sparse));
        assert_eq!(RetrievalMode::parse_token("DENSE"), Some(RetrievalMode::Dense));
        assert_eq!(RetrievalMode::parse_token("Hybrid"), Some(RetrievalMode::Hybrid));
        assert_eq!(RetrievalMode::parse_token("lexical"), None);
    }

    #[test]
    fn scored_document_serializes_with_flat_fields() {
        let doc = ScoredDocument::new("q1", "doc1", 0.9);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"query_id": "q1", "doc_id": "doc1", "relevance": 0.9})
        );
    }
}
