//! rankeval CLI - retrieval quality evaluation against a labeled query set
//!
//! Issues each query from the input dataset against the search backend in the
//! selected retrieval mode, computes aggregate IR metrics against the
//! dataset's relevance judgments, and persists a per-query audit log.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::Parser;
use rankeval::driver::{run_queries, RunOptions};
use rankeval::logfile::write_log;
use rankeval_backend::HttpBackend;
use rankeval_core::{Dataset, RetrievalMode};
use rankeval_metrics::{calc_aggregate, MetricSpec};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "rankeval")]
#[command(about = "Evaluate ranking profiles against relevance judgments")]
#[command(version)]
struct Cli {
    /// Ranking profile to evaluate
    #[arg(long)]
    ranking: String,

    /// Retrieval mode
    #[arg(long, default_value = "sparse", value_parser = ["sparse", "dense", "hybrid"])]
    mode: String,

    /// Input JSON file containing queries and qrels
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// text_format filter value for candidate documents
    #[arg(long, default_value = "ocr")]
    format: String,

    /// Output JSON file for per-query logs
    #[arg(long, default_value = "search_logs.json", value_name = "FILE")]
    log: PathBuf,

    /// Search endpoint requests are posted to
    #[arg(long, default_value = "http://localhost:8080/search/")]
    endpoint: String,

    /// Number of hits requested per query
    #[arg(long, default_value_t = 10)]
    hits: usize,

    /// Query language tag
    #[arg(long, default_value = "en")]
    language: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // clap restricts the token set, so an unrecognized mode is unreachable
    let mode = RetrievalMode::parse_token(&cli.mode).unwrap_or(RetrievalMode::Sparse);

    // Dataset problems are fatal before any query is processed
    let dataset = Dataset::load(&cli.input)
        .with_context(|| format!("Error loading input file {}", cli.input.display()))?;

    let options = RunOptions {
        mode,
        ranking: cli.ranking.clone(),
        hits: cli.hits,
        language: cli.language.clone(),
        format: cli.format.clone(),
    };

    let backend = HttpBackend::new(&cli.endpoint);
    let outcome = run_queries(&backend, &dataset.queries, &dataset.qrels, &options).await;

    let specs = MetricSpec::default_run_set();
    let results = calc_aggregate(&specs, &dataset.qrels, &outcome.scored);

    println!("\nRanking Metrics:");
    for (spec, score) in &results {
        println!("{spec} for rank profile '{}': {score:.4}", cli.ranking);
    }

    // Metrics are already reported; a log write failure only warrants a warning
    match write_log(&cli.log, &outcome.log) {
        Ok(()) => println!("\nLogs have been saved to {}", cli.log.display()),
        Err(e) => warn!("Failed to save logs to {}: {e}", cli.log.display()),
    }

    Ok(())
}

/// Initialize logging system
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "rankeval={level},rankeval_core={level},rankeval_backend={level},rankeval_metrics={level}"
        ))
        .init();
}
