//! Evaluation driver
//!
//! Orchestrates one run: for each query, formulate the request, dispatch it,
//! normalize the response, and accumulate scored documents alongside a
//! per-query audit record. A failed query is terminal for that query only:
//! the error is logged into its record, it contributes zero scored documents,
//! and the run continues with the next query. No retries.

use rankeval_backend::{normalize, SearchBackend, SearchRequest, SearchResponse};
use rankeval_core::{Qrels, RetrievalMode, ScoredDocument};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Retrieval options fixed once for the whole run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: RetrievalMode,
    /// Ranking profile name passed through to the backend
    pub ranking: String,
    /// Result-count cutoff requested per query
    pub hits: usize,
    pub language: String,
    /// text-format filter value for candidate documents
    pub format: String,
}

/// Per-query audit record, serialized into the run log
///
/// Optional fields are populated as the query progresses and omitted from
/// the serialized form when absent: a failed query carries `error` but no
/// `raw_response` or `transformed_results`.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub qid: String,
    pub query: String,
    /// Outgoing request in wire form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<SearchRequest>,
    /// Backend response body verbatim, pre-normalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformed_results: Option<Vec<ScoredDocument>>,
    /// Judged relevance grades for this query, when present in the qrels
    /// table; attached for audit only, metric computation reads the table
    /// directly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_document: Option<BTreeMap<String, u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogEntry {
    fn new(qid: &str, query: &str) -> Self {
        Self {
            qid: qid.to_string(),
            query: query.to_string(),
            request: None,
            raw_response: None,
            transformed_results: None,
            optimal_document: None,
            error: None,
        }
    }
}

/// Accumulated output of one evaluation run
#[derive(Debug)]
pub struct RunOutcome {
    /// Scored documents across all queries, in processing order
    pub scored: Vec<ScoredDocument>,
    /// One log entry per query, in processing order
    pub log: Vec<LogEntry>,
}

/// Process every query sequentially against the backend
///
/// Queries run one at a time with no concurrent in-flight requests; a run
/// always processes the full query set regardless of per-query failures.
pub async fn run_queries(
    backend: &dyn SearchBackend,
    queries: &BTreeMap<String, String>,
    qrels: &Qrels,
    options: &RunOptions,
) -> RunOutcome {
    let mut scored = Vec::new();
    let mut log = Vec::with_capacity(queries.len());

    for (qid, query_text) in queries {
        info!(%qid, "processing query");
        let mut entry = LogEntry::new(qid, query_text);

        let request = SearchRequest::formulate(
            query_text,
            options.mode,
            &options.ranking,
            options.hits,
            &options.language,
            &options.format,
        );
        entry.request = Some(request.clone());

        match backend.search(&request).await {
            Ok(raw) => {
                entry.raw_response = Some(raw.clone());
                match serde_json::from_value::<SearchResponse>(raw) {
                    Ok(response) => {
                        let docs = normalize(&response, qid);
                        entry.transformed_results = Some(docs.clone());
                        scored.extend(docs);
                    }
                    Err(e) => {
                        warn!(%qid, error = %e, "unparseable search response");
                        entry.error = Some(format!("unparseable search response: {e}"));
                    }
                }
            }
            Err(e) => {
                warn!(%qid, error = %e, "search request failed");
                entry.error = Some(e.to_string());
            }
        }

        entry.optimal_document = qrels.get(qid).cloned();
        log.push(entry);
    }

    RunOutcome { scored, log }
}
