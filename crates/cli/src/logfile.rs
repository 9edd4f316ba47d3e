//! Run-log persistence
//!
//! The per-query log sequence is written once at end of run as a
//! pretty-printed JSON array. A write failure is recoverable: metrics have
//! already been reported by the time the log is flushed.

use crate::driver::LogEntry;
use rankeval_core::{Error, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write the run's log entries to `path` as a JSON array
pub fn write_log(path: impl AsRef<Path>, entries: &[LogEntry]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::log_write(format!("failed to create {}: {e}", path.display())))?;
    serde_json::to_writer_pretty(BufWriter::new(file), entries)
        .map_err(|e| Error::log_write(format!("failed to write {}: {e}", path.display())))?;
    Ok(())
}
