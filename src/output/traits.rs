//! Row sink trait and output errors

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Capability to persist a header row and a sequence of records as a
/// delimited table
pub trait RowSink {
    /// Writes the header followed by one line per row to `path`,
    /// replacing any previous file
    fn write(&self, path: &Path, header: &[&str], rows: &[Vec<String>]) -> OutputResult<()>;
}
