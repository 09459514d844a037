//! listsift: a keyword-filtering scraper for paginated listing sites
//!
//! This crate implements a two-pass crawl-and-filter pipeline: it walks the
//! index pages of a public-document listing site to discover entries, then
//! fetches each entry's detail page and keeps the ones whose content matches
//! a configured keyword. Matches are written out as a tab-delimited table.

pub mod config;
pub mod crawler;
pub mod fetch;
pub mod output;
pub mod records;

use thiserror::Error;

/// Main error type for listsift operations
#[derive(Debug, Error)]
pub enum SiftError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Unexpected page structure at {url}: {message}")]
    Structure { url: String, message: String },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for listsift operations
pub type Result<T> = std::result::Result<T, SiftError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::run_scan;
pub use fetch::{HttpFetcher, PageFetcher};
pub use records::{EntryRecord, ResultRecord};
