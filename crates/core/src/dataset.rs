//! Query and relevance-judgment dataset loading
//!
//! The evaluation dataset is a single JSON file with two mandatory top-level
//! objects:
//!
//! ```json
//! {
//!   "queries": { "q1": "query text1", "q2": "query text2" },
//!   "qrels": { "q1": { "doc1": 2, "doc2": 1 } }
//! }
//! ```
//!
//! Both tables are loaded once at startup and are immutable for the run.
//! Any malformed or incomplete file is a fatal dataset error.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Relevance judgments: query-id -> doc-id -> judged relevance grade
///
/// Grades are non-negative integers, 0 meaning not relevant.
pub type Qrels = BTreeMap<String, BTreeMap<String, u32>>;

/// Labeled query set plus relevance judgments for one evaluation run
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    /// query-id -> query text
    pub queries: BTreeMap<String, String>,
    pub qrels: Qrels,
}

impl Dataset {
    /// Load the dataset from a JSON file
    ///
    /// Fails if the file cannot be read or if either of the `queries` and
    /// `qrels` objects is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::dataset(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    /// Parse the dataset from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::dataset(format!("input must contain 'queries' and 'qrels' objects: {e}")))
    }
}
