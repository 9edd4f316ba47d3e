//! Aggregate metric computation over a run's scored documents
//!
//! Consumes the full accumulated scored-document sequence, the qrels table,
//! and a fixed list of metric specifications, and produces one mean score per
//! specification. The mean runs over every query present in the qrels table;
//! queries that contributed no scored documents score zero for rank-sensitive
//! metrics, which is the standard convention for an unavailable result set.

use crate::spec::{MetricKind, MetricSpec};
use rankeval_core::{Qrels, ScoredDocument};
use std::collections::{BTreeMap, HashMap};

/// Judged grades for one query: doc-id -> grade
type Judgments = BTreeMap<String, u32>;

/// Compute one aggregate score per specification
///
/// Per-query runs are ordered by relevance score descending (stable, so the
/// backend's rank order breaks ties) before cutoff metrics are applied.
pub fn calc_aggregate(
    specs: &[MetricSpec],
    qrels: &Qrels,
    scored: &[ScoredDocument],
) -> Vec<(MetricSpec, f64)> {
    let runs = group_by_query(scored);

    specs
        .iter()
        .map(|&spec| {
            let mean = if qrels.is_empty() {
                0.0
            } else {
                let total: f64 = qrels
                    .iter()
                    .map(|(qid, judgments)| {
                        let ranked = runs.get(qid.as_str()).map(Vec::as_slice).unwrap_or(&[]);
                        per_query(spec, ranked, judgments)
                    })
                    .sum();
                total / qrels.len() as f64
            };
            (spec, mean)
        })
        .collect()
}

/// Group scored documents by query and order each run by score descending
fn group_by_query(scored: &[ScoredDocument]) -> HashMap<&str, Vec<&str>> {
    let mut by_query: HashMap<&str, Vec<(&str, f64)>> = HashMap::new();
    for doc in scored {
        by_query
            .entry(doc.query_id.as_str())
            .or_default()
            .push((doc.doc_id.as_str(), doc.relevance));
    }

    by_query
        .into_iter()
        .map(|(qid, mut run)| {
            run.sort_by(|a, b| b.1.total_cmp(&a.1));
            (qid, run.into_iter().map(|(doc, _)| doc).collect())
        })
        .collect()
}

fn per_query(spec: MetricSpec, ranked: &[&str], judgments: &Judgments) -> f64 {
    match spec.kind {
        MetricKind::Ndcg => ndcg_at_k(ranked, judgments, spec.cutoff),
        MetricKind::Precision => {
            precision_at_k(ranked, judgments, spec.rel_threshold(), spec.cutoff)
        }
        MetricKind::Recall => recall_at_k(ranked, judgments, spec.rel_threshold(), spec.cutoff),
        MetricKind::Mrr => reciprocal_rank_at_k(ranked, judgments, spec.rel_threshold(), spec.cutoff),
    }
}

/// Normalized Discounted Cumulative Gain at k
///
/// Linear graded gain `rel / log2(rank + 1)`; the ideal ranking places the
/// highest grades first. Returns 0.0 when the query has no positively graded
/// documents.
fn ndcg_at_k(ranked: &[&str], judgments: &Judgments, k: usize) -> f64 {
    let dcg: f64 = ranked
        .iter()
        .take(k)
        .enumerate()
        .map(|(i, doc)| grade(judgments, doc) / discount(i))
        .sum();

    let mut ideal: Vec<u32> = judgments.values().copied().filter(|&g| g > 0).collect();
    ideal.sort_unstable_by(|a, b| b.cmp(a));
    let idcg: f64 = ideal
        .iter()
        .take(k)
        .enumerate()
        .map(|(i, &g)| f64::from(g) / discount(i))
        .sum();

    if idcg == 0.0 {
        return 0.0;
    }
    dcg / idcg
}

/// Fraction of the top-k positions holding a relevant document
fn precision_at_k(ranked: &[&str], judgments: &Judgments, rel: u32, k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    relevant_in_top_k(ranked, judgments, rel, k) as f64 / k as f64
}

/// Fraction of the relevant set retrieved within the top-k
fn recall_at_k(ranked: &[&str], judgments: &Judgments, rel: u32, k: usize) -> f64 {
    let total_relevant = judgments.values().filter(|&&g| g >= rel).count();
    if total_relevant == 0 {
        return 0.0;
    }
    relevant_in_top_k(ranked, judgments, rel, k) as f64 / total_relevant as f64
}

/// Reciprocal rank of the first relevant document within the top-k, 0 if none
fn reciprocal_rank_at_k(ranked: &[&str], judgments: &Judgments, rel: u32, k: usize) -> f64 {
    ranked
        .iter()
        .take(k)
        .position(|doc| grade_u32(judgments, doc) >= rel)
        .map_or(0.0, |i| 1.0 / (i as f64 + 1.0))
}

fn relevant_in_top_k(ranked: &[&str], judgments: &Judgments, rel: u32, k: usize) -> usize {
    ranked
        .iter()
        .take(k)
        .filter(|doc| grade_u32(judgments, doc) >= rel)
        .count()
}

fn grade_u32(judgments: &Judgments, doc: &str) -> u32 {
    judgments.get(doc).copied().unwrap_or(0)
}

fn grade(judgments: &Judgments, doc: &str) -> f64 {
    f64::from(grade_u32(judgments, doc))
}

/// log2 discount for zero-based rank position
fn discount(i: usize) -> f64 {
    (i as f64 + 2.0).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judgments(pairs: &[(&str, u32)]) -> Judgments {
        pairs
            .iter()
            .map(|(doc, g)| (doc.to_string(), *g))
            .collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    // nDCG

    #[test]
    fn ndcg_perfect_ranking_is_one() {
        let j = judgments(&[("a", 2), ("b", 1)]);
        let score = ndcg_at_k(&["a", "b"], &j, 5);
        assert!(close(score, 1.0), "got {score}");
    }

    #[test]
    fn ndcg_rewards_relevant_docs_ranked_higher() {
        let j = judgments(&[("a", 2), ("b", 1)]);
        let good = ndcg_at_k(&["a", "b", "x"], &j, 3);
        let bad = ndcg_at_k(&["x", "b", "a"], &j, 3);
        assert!(good > bad, "{good} vs {bad}");
    }

    #[test]
    fn ndcg_no_judged_relevant_is_zero() {
        let j = judgments(&[("a", 0)]);
        assert!(close(ndcg_at_k(&["a", "b"], &j, 5), 0.0));
    }

    #[test]
    fn ndcg_empty_run_is_zero() {
        let j = judgments(&[("a", 2)]);
        assert!(close(ndcg_at_k(&[], &j, 5), 0.0));
    }

    #[test]
    fn ndcg_uses_graded_gain() {
        // Swapping a grade-2 and a grade-1 doc must lower the score, which
        // only happens when the gain is graded rather than binary.
        let j = judgments(&[("a", 2), ("b", 1)]);
        let ordered = ndcg_at_k(&["a", "b"], &j, 2);
        let swapped = ndcg_at_k(&["b", "a"], &j, 2);
        assert!(close(ordered, 1.0));
        assert!(swapped < ordered);
    }

    // Precision

    #[test]
    fn precision_divides_by_cutoff_not_run_length() {
        let j = judgments(&[("a", 1)]);
        let score = precision_at_k(&["a"], &j, 1, 5);
        assert!(close(score, 0.2), "got {score}");
    }

    #[test]
    fn precision_at_one_is_binary_on_the_top_hit() {
        let j = judgments(&[("a", 1)]);
        assert!(close(precision_at_k(&["a", "x"], &j, 1, 1), 1.0));
        assert!(close(precision_at_k(&["x", "a"], &j, 1, 1), 0.0));
    }

    #[test]
    fn precision_respects_the_relevance_threshold() {
        let j = judgments(&[("a", 1), ("b", 2)]);
        let score = precision_at_k(&["a", "b"], &j, 2, 2);
        assert!(close(score, 0.5), "got {score}");
    }

    // Recall

    #[test]
    fn recall_counts_fraction_of_relevant_found() {
        let j = judgments(&[("a", 1), ("b", 1)]);
        let score = recall_at_k(&["a", "x", "y"], &j, 1, 3);
        assert!(close(score, 0.5), "got {score}");
    }

    #[test]
    fn recall_cutoff_limits_the_run() {
        let j = judgments(&[("a", 1), ("b", 1)]);
        let score = recall_at_k(&["a", "x", "b"], &j, 1, 2);
        assert!(close(score, 0.5), "got {score}");
    }

    #[test]
    fn recall_with_no_relevant_judged_is_zero() {
        let j = judgments(&[("a", 0)]);
        assert!(close(recall_at_k(&["a"], &j, 1, 5), 0.0));
    }

    // MRR

    #[test]
    fn reciprocal_rank_of_first_relevant() {
        let j = judgments(&[("a", 1)]);
        assert!(close(reciprocal_rank_at_k(&["x", "y", "a"], &j, 1, 5), 1.0 / 3.0));
    }

    #[test]
    fn reciprocal_rank_outside_cutoff_is_zero() {
        let j = judgments(&[("a", 1)]);
        assert!(close(reciprocal_rank_at_k(&["x", "y", "a"], &j, 1, 2), 0.0));
    }

    // Aggregation

    #[test]
    fn aggregate_means_over_qrels_queries() {
        let mut qrels = Qrels::new();
        qrels.insert("q1".into(), judgments(&[("a", 1)]));
        qrels.insert("q2".into(), judgments(&[("b", 1)]));

        // q1 finds its document at rank 1; q2 contributed no results.
        let scored = vec![ScoredDocument::new("q1", "a", 0.9)];
        let results = calc_aggregate(&[MetricSpec::mrr(5)], &qrels, &scored);
        assert!(close(results[0].1, 0.5), "got {}", results[0].1);
    }

    #[test]
    fn absent_query_contributes_zero_not_absence() {
        let mut qrels = Qrels::new();
        qrels.insert("q1".into(), judgments(&[("a", 1)]));
        qrels.insert("q2".into(), judgments(&[("b", 1)]));

        let scored = vec![
            ScoredDocument::new("q1", "a", 0.9),
            ScoredDocument::new("q2", "b", 0.8),
        ];
        let full = calc_aggregate(&[MetricSpec::recall(1, 5)], &qrels, &scored);
        let half = calc_aggregate(
            &[MetricSpec::recall(1, 5)],
            &qrels,
            &scored[..1].to_vec(),
        );
        assert!(close(full[0].1, 1.0));
        assert!(close(half[0].1, 0.5));
    }

    #[test]
    fn runs_are_ordered_by_score_before_cutoff() {
        let mut qrels = Qrels::new();
        qrels.insert("q1".into(), judgments(&[("best", 1)]));

        // Accumulation order is not score order; the aggregator must sort.
        let scored = vec![
            ScoredDocument::new("q1", "noise", 0.2),
            ScoredDocument::new("q1", "best", 0.9),
        ];
        let results = calc_aggregate(&[MetricSpec::precision(1, 1)], &qrels, &scored);
        assert!(close(results[0].1, 1.0), "got {}", results[0].1);
    }

    #[test]
    fn graded_qrels_scenario_at_cutoff_one() {
        // qrels {"q1": {"docA": 2, "docB": 1}}, run [(q1, docA, 1.0)]:
        // P(rel=1)@1 = 1, R(rel=1)@5 = 1/2.
        let mut qrels = Qrels::new();
        qrels.insert("q1".into(), judgments(&[("docA", 2), ("docB", 1)]));
        let scored = vec![ScoredDocument::new("q1", "docA", 1.0)];

        let results = calc_aggregate(
            &[MetricSpec::precision(1, 1), MetricSpec::recall(1, 5)],
            &qrels,
            &scored,
        );
        assert!(close(results[0].1, 1.0));
        assert!(close(results[1].1, 0.5));
    }

    #[test]
    fn empty_qrels_yields_zero_aggregates() {
        let results = calc_aggregate(&[MetricSpec::ndcg(5)], &Qrels::new(), &[]);
        assert!(close(results[0].1, 0.0));
    }
}
