//! Information-retrieval metric aggregation for rankeval
//!
//! Computes standard IR metrics over a run's accumulated scored documents:
//!
//! - **nDCG@k**: normalized discounted cumulative gain (graded)
//! - **P@k**: precision at a fixed cutoff
//! - **R@k**: recall at a fixed cutoff
//! - **MRR@k**: mean reciprocal rank
//!
//! The contract is intentionally narrow: a list of [`MetricSpec`], the qrels
//! table, and the scored-document triples go in; one aggregate score per
//! specification comes out.

pub mod aggregate;
pub mod spec;

pub use aggregate::calc_aggregate;
pub use spec::{MetricKind, MetricSpec};
