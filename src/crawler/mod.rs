//! Two-pass crawl pipeline
//!
//! This module contains the core scan logic:
//! - List-page discovery with pagination and dedup
//! - Detail-page retrieval with keyword filtering
//! - Result aggregation and ordering

mod aggregate;
mod detail;
mod list;
mod parser;

pub use aggregate::finalize;
pub use detail::{extract_results, truncate_summary};
pub use list::discover_entries;
pub use parser::{parse_content_nodes, parse_list_items, ListItem};

use crate::config::Config;
use crate::fetch::PageFetcher;
use crate::records::ResultRecord;
use crate::Result;

/// Runs the full two-pass scan: discovery, then detail extraction, then
/// aggregation
///
/// Returns the final result sequence in discovery order. Writing the rows
/// out is the caller's business.
pub async fn run_scan(config: &Config, fetcher: &dyn PageFetcher) -> Result<Vec<ResultRecord>> {
    let entries = discover_entries(&config.scan, fetcher).await?;
    let results = extract_results(config, fetcher, &entries).await?;
    Ok(finalize(results))
}
