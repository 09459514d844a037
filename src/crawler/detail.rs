//! Detail-page extraction
//!
//! Second crawl pass: fetch every discovered entry's detail page, scan its
//! content nodes for the configured keywords, and build the result records.
//!
//! Detail fetches run with bounded concurrency (`max-concurrent-details`,
//! default 1). `buffered` yields futures in input order regardless of
//! completion order, so the output-order contract (results in discovery
//! order) holds without any re-sorting.

use crate::config::Config;
use crate::crawler::parser::parse_content_nodes;
use crate::fetch::PageFetcher;
use crate::records::{EntryRecord, ResultRecord};
use crate::Result;
use futures::stream::{self, StreamExt};
use indexmap::IndexMap;

/// Fetches detail pages for every entry, in discovery order, and returns
/// the records that pass the keyword filter
///
/// With a non-empty keyword list an entry yields at most one record, built
/// from the first matching content node; entries with no match are dropped
/// silently. With an empty keyword list every entry passes through with an
/// empty summary.
///
/// A failed detail fetch aborts the pass unless `skip-failed-details` is
/// set, in which case the entry is logged and dropped.
pub async fn extract_results(
    config: &Config,
    fetcher: &dyn PageFetcher,
    entries: &IndexMap<String, EntryRecord>,
) -> Result<Vec<ResultRecord>> {
    let concurrency = config.fetcher.max_concurrent_details.max(1) as usize;

    let mut pending = stream::iter(
        entries
            .values()
            .map(|entry| process_entry(config, fetcher, entry)),
    )
    .buffered(concurrency);

    let mut results = Vec::new();
    while let Some(outcome) = pending.next().await {
        match outcome {
            Ok(Some(record)) => {
                tracing::info!("match: {} ({})", record.url, record.title);
                results.push(record);
            }
            Ok(None) => {}
            Err(e) if config.scan.skip_failed_details => {
                tracing::warn!("Skipping entry after detail failure: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Detail pass complete: {} of {} entries matched",
        results.len(),
        entries.len()
    );

    Ok(results)
}

/// Fetches and filters a single entry's detail page
async fn process_entry(
    config: &Config,
    fetcher: &dyn PageFetcher,
    entry: &EntryRecord,
) -> Result<Option<ResultRecord>> {
    let url = format!("{}{}", config.scan.detail_url_base, entry.key);

    let body = fetcher.fetch(&url).await?;
    let nodes = parse_content_nodes(&body);

    if config.scan.keywords.is_empty() {
        // Passthrough mode: no filtering, no summary
        return Ok(Some(ResultRecord {
            url,
            title: entry.title.clone(),
            published_at: entry.published_at.clone(),
            summary: String::new(),
        }));
    }

    let matched = first_match(&nodes, &config.scan.keywords);

    Ok(matched.map(|text| ResultRecord {
        url,
        title: entry.title.clone(),
        published_at: entry.published_at.clone(),
        summary: truncate_summary(text, config.scan.summary_limit),
    }))
}

/// Single linear scan over (node, keyword) pairs in document-order x
/// keyword-order; returns the first node containing any keyword
fn first_match<'a>(nodes: &'a [String], keywords: &[String]) -> Option<&'a str> {
    nodes
        .iter()
        .find(|node| keywords.iter().any(|kw| node.contains(kw.as_str())))
        .map(String::as_str)
}

/// Truncates matched text to `limit` characters, appending a `..` marker
/// whenever the text reaches the limit
///
/// Counts Unicode scalar values rather than bytes; the keywords this tool
/// exists for are CJK, where byte slicing would split code points. A text
/// of exactly `limit` characters is kept whole but still gets the marker.
pub fn truncate_summary(text: &str, limit: usize) -> String {
    let length = text.chars().count();
    let mut summary: String = text.chars().take(limit).collect();
    if length >= limit {
        summary.push_str("..");
    }
    summary
}
