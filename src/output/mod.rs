//! Output module for persisting scan results
//!
//! This module handles writing the final result table: the `RowSink`
//! capability plus the TSV implementation used by the CLI.

mod traits;
mod tsv;

pub use traits::{OutputError, OutputResult, RowSink};
pub use tsv::TsvSink;

use crate::records::ResultRecord;
use std::path::Path;

/// Column order of the result table
pub const RESULT_HEADER: [&str; 4] = ["link", "title", "datetime", "summary"];

/// Writes the final result sequence through the given sink
///
/// One data row per record, in the order given.
pub fn write_results(
    sink: &dyn RowSink,
    path: &Path,
    results: Vec<ResultRecord>,
) -> OutputResult<()> {
    let rows: Vec<Vec<String>> = results.into_iter().map(ResultRecord::into_row).collect();
    sink.write(path, &RESULT_HEADER, &rows)
}
