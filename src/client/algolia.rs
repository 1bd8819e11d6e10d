//! Hacker News search API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::client::SearchBackend;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::{SearchRequest, SearchResponse};

/// Client for the Hacker News search API (Algolia).
#[derive(Debug, Clone)]
pub struct AlgoliaClient {
    http_client: Client,
    base_url: String,
}

impl AlgoliaClient {
    /// Creates a client from the configuration's base URL and timeout.
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: config.base_url.clone(),
        }
    }

    /// Sets a custom base URL for the API (useful for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl SearchBackend for AlgoliaClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        let url = format!("{}/search", self.base_url);
        debug!(url = %url, term = %request.term, page = request.page, "Sending search request");

        let response = self
            .http_client
            .get(&url)
            .query(&request.query_params())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Network error during search request");
                FetchError::Network(e)
            })?;

        let status = response.status();
        debug!(status = %status, "Received search response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Search API error");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await.map_err(FetchError::Network)?;
        let page: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse search response");
            FetchError::InvalidResponse(format!("JSON parse error: {e}"))
        })?;

        debug!(
            term = %request.term,
            page = page.page,
            hit_count = page.hits.len(),
            "Search completed"
        );

        Ok(page)
    }
}
