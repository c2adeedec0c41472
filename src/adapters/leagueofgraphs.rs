//! LeagueOfGraphs build-page fetcher.

use async_trait::async_trait;
use tracing::debug;

use super::{DocumentFetcher, FetchError};
use crate::config;

/// HTTP fetcher for champion build pages.
pub struct LeagueOfGraphsFetcher {
    /// HTTP client
    client: reqwest::Client,
    /// Base URL for build pages (overridable for tests)
    base_url: String,
}

impl Default for LeagueOfGraphsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LeagueOfGraphsFetcher {
    /// Create a fetcher pointed at the production build-page base URL.
    pub fn new() -> Self {
        Self::with_base_url(config::BUILD_PAGE_BASE)
    }

    /// Create a fetcher with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn page_url(&self, subject_key: &str) -> String {
        format!("{}/{}", self.base_url, subject_key)
    }
}

#[async_trait]
impl DocumentFetcher for LeagueOfGraphsFetcher {
    async fn fetch(&self, subject_key: &str) -> Result<String, FetchError> {
        let url = self.page_url(subject_key);
        debug!(%url, "fetching build page");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, config::USER_AGENT)
            .timeout(config::FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::NotFound(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(e.to_string())
            }
        })
    }
}
