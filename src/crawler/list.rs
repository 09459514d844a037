//! List-page discovery
//!
//! First crawl pass: walk every index page implied by the configured item
//! count, pull the entry references out of each page, and dedup them into
//! an insertion-ordered entry set.

use crate::config::ScanConfig;
use crate::crawler::parser::parse_list_items;
use crate::fetch::PageFetcher;
use crate::records::EntryRecord;
use crate::{Result, SiftError};
use indexmap::IndexMap;

/// Walks pages `1..=page_count` and collects the deduplicated entry set
///
/// The link reference is the dedup identity: the first occurrence wins and
/// later pages cannot overwrite an already-seen entry's title or date. The
/// returned map preserves first-insertion order, which fixes the order of
/// every later stage.
///
/// The page range is inclusive of the final, possibly partial page; with
/// 97 items at 20 per page all 5 pages are visited.
///
/// Any fetch failure or a list page without the expected item container
/// aborts discovery; there is no partial-page recovery.
pub async fn discover_entries(
    scan: &ScanConfig,
    fetcher: &dyn PageFetcher,
) -> Result<IndexMap<String, EntryRecord>> {
    let page_count = scan.page_count();
    let mut entries: IndexMap<String, EntryRecord> = IndexMap::new();

    for page in 1..=page_count {
        let url = scan.index_url(page);
        tracing::debug!("Fetching list page {}/{}: {}", page, page_count, url);

        let body = fetcher.fetch(&url).await?;
        let items = parse_list_items(&body);

        if items.is_empty() {
            return Err(SiftError::Structure {
                url,
                message: "no list items under the expected container".to_string(),
            });
        }

        let mut new_on_page = 0usize;
        for item in items {
            if entries.contains_key(&item.link) {
                continue;
            }
            new_on_page += 1;
            entries.insert(
                item.link.clone(),
                EntryRecord {
                    key: item.link,
                    title: item.title,
                    published_at: item.datetime,
                },
            );
        }

        tracing::debug!(
            "List page {}: {} new entries ({} total)",
            page,
            new_on_page,
            entries.len()
        );
    }

    tracing::info!(
        "Discovered {} unique entries across {} pages",
        entries.len(),
        page_count
    );

    Ok(entries)
}
