//! Library interface for the rankeval CLI
//!
//! Exposes the evaluation driver and log writer for integration testing
//! while keeping the command-line logic in main.rs.

pub mod driver;
pub mod logfile;

pub use driver::{run_queries, LogEntry, RunOptions, RunOutcome};
pub use logfile::write_log;
