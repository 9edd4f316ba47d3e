//! Metric specifications
//!
//! A [`MetricSpec`] names one aggregate to report: a metric kind, an optional
//! relevance threshold, and a fixed cutoff rank. Specs render in the
//! conventional IR notation, e.g. `nDCG@5` or `P(rel=1)@1`.

use std::fmt;

/// Kind of information-retrieval metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Normalized discounted cumulative gain (graded, rank-sensitive)
    Ndcg,
    /// Fraction of the top-k that is relevant
    Precision,
    /// Fraction of the relevant set found in the top-k
    Recall,
    /// Reciprocal rank of the first relevant document
    Mrr,
}

/// One (metric, threshold, cutoff) aggregate to compute for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricSpec {
    pub kind: MetricKind,
    /// Minimum judged grade counting as relevant; `None` renders without the
    /// `rel=` annotation and defaults to 1 for set-based metrics
    pub rel: Option<u32>,
    /// Cutoff rank k
    pub cutoff: usize,
}

impl MetricSpec {
    pub fn ndcg(cutoff: usize) -> Self {
        Self {
            kind: MetricKind::Ndcg,
            rel: None,
            cutoff,
        }
    }

    pub fn precision(rel: u32, cutoff: usize) -> Self {
        Self {
            kind: MetricKind::Precision,
            rel: Some(rel),
            cutoff,
        }
    }

    pub fn recall(rel: u32, cutoff: usize) -> Self {
        Self {
            kind: MetricKind::Recall,
            rel: Some(rel),
            cutoff,
        }
    }

    pub fn mrr(cutoff: usize) -> Self {
        Self {
            kind: MetricKind::Mrr,
            rel: None,
            cutoff,
        }
    }

    /// Grade at or above which a judged document counts as relevant
    pub fn rel_threshold(&self) -> u32 {
        self.rel.unwrap_or(1)
    }

    /// The fixed set of aggregates reported for every evaluation run
    pub fn default_run_set() -> Vec<MetricSpec> {
        vec![
            Self::ndcg(5),
            Self::precision(1, 1),
            Self::recall(1, 5),
            Self::recall(1, 10),
            Self::mrr(5),
            Self::recall(1, 8),
        ]
    }
}

impl fmt::Display for MetricSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            MetricKind::Ndcg => "nDCG",
            MetricKind::Precision => "P",
            MetricKind::Recall => "R",
            MetricKind::Mrr => "MRR",
        };
        match self.rel {
            Some(rel) => write!(f, "{name}(rel={rel})@{}", self.cutoff),
            None => write!(f, "{name}@{}", self.cutoff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_conventional_notation() {
        assert_eq!(MetricSpec::ndcg(5).to_string(), "nDCG@5");
        assert_eq!(MetricSpec::precision(1, 1).to_string(), "P(rel=1)@1");
        assert_eq!(MetricSpec::recall(2, 10).to_string(), "R(rel=2)@10");
        assert_eq!(MetricSpec::mrr(5).to_string(), "MRR@5");
    }

    #[test]
    fn default_run_set_matches_the_reported_aggregates() {
        let rendered: Vec<String> = MetricSpec::default_run_set()
            .iter()
            .map(MetricSpec::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "nDCG@5",
                "P(rel=1)@1",
                "R(rel=1)@5",
                "R(rel=1)@10",
                "MRR@5",
                "R(rel=1)@8"
            ]
        );
    }

    #[test]
    fn threshold_defaults_to_one_when_unannotated() {
        assert_eq!(MetricSpec::mrr(5).rel_threshold(), 1);
        assert_eq!(MetricSpec::recall(2, 5).rel_threshold(), 2);
    }
}
