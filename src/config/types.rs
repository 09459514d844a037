use serde::Deserialize;

/// Main configuration structure for listsift
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scan: ScanConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    pub output: OutputConfig,
}

/// Scan parameters: where the listing lives and what to keep from it
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Index page URL template; must contain `{tag}` and `{page}` placeholders
    #[serde(rename = "index-url-template")]
    pub index_url_template: String,

    /// Base URL that entry link references are resolved against
    #[serde(rename = "detail-url-base")]
    pub detail_url_base: String,

    /// Number of items the site shows per index page
    #[serde(rename = "page-size")]
    pub page_size: u32,

    /// Total number of items the listing claims to hold
    #[serde(rename = "total-item-count")]
    pub total_item_count: u32,

    /// Listing tag number substituted into the URL template
    #[serde(rename = "tag-number")]
    pub tag_number: u32,

    /// Keywords to look for in detail-page content, in priority order.
    /// Empty means no filtering: every entry passes through.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Maximum summary length in characters before truncation
    #[serde(rename = "summary-limit")]
    pub summary_limit: usize,

    /// When true, a failed detail fetch drops that entry instead of
    /// aborting the whole run
    #[serde(rename = "skip-failed-details", default)]
    pub skip_failed_details: bool,
}

/// Fetcher behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Maximum number of detail pages fetched concurrently
    #[serde(rename = "max-concurrent-details", default = "default_concurrency")]
    pub max_concurrent_details: u32,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// User-Agent strings to rotate through. Empty uses the built-in pool.
    #[serde(rename = "user-agents", default)]
    pub user_agents: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the TSV result table
    #[serde(rename = "result-path")]
    pub result_path: String,
}

fn default_concurrency() -> u32 {
    1
}

fn default_timeout() -> u64 {
    30
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_concurrent_details: default_concurrency(),
            request_timeout_secs: default_timeout(),
            user_agents: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Number of index pages implied by the item count and page size
    pub fn page_count(&self) -> u32 {
        self.total_item_count.div_ceil(self.page_size)
    }

    /// Builds the index URL for one page by substituting the template
    /// placeholders
    pub fn index_url(&self, page: u32) -> String {
        self.index_url_template
            .replace("{tag}", &self.tag_number.to_string())
            .replace("{page}", &page.to_string())
    }
}
