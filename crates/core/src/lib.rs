//! Core types for the rankeval retrieval-evaluation tool
//!
//! This crate provides the foundational abstractions shared across the
//! rankeval workspace:
//!
//! - **Retrieval modes**: sparse, dense, and hybrid query-construction policies
//! - **Scored documents**: the canonical (query, document, relevance) triple
//! - **Datasets**: labeled query sets and relevance judgments (qrels)
//! - **Error handling**: unified error types

pub mod dataset;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use dataset::{Dataset, Qrels};
pub use error::{Error, Result};
pub use types::{RetrievalMode, ScoredDocument};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
