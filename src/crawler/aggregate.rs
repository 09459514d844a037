//! Result aggregation
//!
//! The aggregation stage pins down the output-ordering contract: rows are
//! emitted in the order their entries were discovered, which the detail
//! pass already guarantees. No sorting, grouping, or deduplication happens
//! here; entry keys are unique by construction, so duplicate result URLs
//! cannot occur.

use crate::records::ResultRecord;

/// Hands the result sequence to the sink in discovery order
///
/// Identity today; kept as an explicit stage so the ordering contract has
/// a single owner if aggregation ever grows behavior.
pub fn finalize(results: Vec<ResultRecord>) -> Vec<ResultRecord> {
    results
}
