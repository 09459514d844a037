//! Value types carried through the pipeline

/// A discovered candidate entry, before its content has been fetched
///
/// The `key` is the raw link reference exactly as it appears on the list
/// page; it doubles as the dedup identity across pages. Once inserted into
/// the entry set a record is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    /// Relative link reference, used as dedup identity
    pub key: String,

    /// Entry title as shown on the list page; may be empty
    pub title: String,

    /// Publication date as presented by the source; kept as free-form text
    pub published_at: String,
}

/// A final emitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// Fully resolved detail-page address
    pub url: String,

    /// Title copied from the originating entry
    pub title: String,

    /// Publication date copied from the originating entry, unchanged
    pub published_at: String,

    /// Truncated excerpt of the first matching content node; empty in
    /// passthrough mode
    pub summary: String,
}

impl ResultRecord {
    /// Flattens the record into the TSV column order: link, title,
    /// datetime, summary
    pub fn into_row(self) -> Vec<String> {
        vec![self.url, self.title, self.published_at, self.summary]
    }
}
