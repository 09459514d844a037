//! Page fetching
//!
//! This module owns all HTTP traffic for the pipeline:
//! - Building the HTTP client with timeouts and compression
//! - The [`PageFetcher`] trait the crawl passes around, so tests can
//!   substitute a fake without a network
//! - The reqwest-backed implementation, which attaches a randomized
//!   User-Agent header per request

mod agent;

pub use agent::UserAgentPool;

use crate::config::FetcherConfig;
use crate::{Result, SiftError};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;

/// Capability to fetch the raw HTML body of a page
///
/// Implementations report transport failures as [`SiftError::Fetch`] and
/// non-success HTTP statuses as [`SiftError::Status`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the response body
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Builds an HTTP client with timeouts and compression enabled
///
/// No default User-Agent is set on the client; [`HttpFetcher`] attaches a
/// randomized one per request instead.
pub fn build_http_client(config: &FetcherConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed page fetcher with User-Agent rotation
pub struct HttpFetcher {
    client: Client,
    agents: UserAgentPool,
}

impl HttpFetcher {
    /// Creates a fetcher from the given configuration
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = build_http_client(config)?;
        let agents = UserAgentPool::new(&config.user_agents);
        Ok(Self { client, agents })
    }

    /// Creates a fetcher with an explicit client and agent pool
    pub fn with_client(client: Client, agents: UserAgentPool) -> Self {
        Self { client, agents }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let agent = self.agents.pick().to_string();
        tracing::debug!("GET {} (agent: {})", url, agent);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, agent)
            .send()
            .await
            .map_err(|source| SiftError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiftError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| SiftError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}
