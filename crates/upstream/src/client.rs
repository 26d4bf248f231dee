//! HTTP client for the upstream product/recipe API.
//!
//! Two endpoints feed the recommendation pipeline:
//! - `GET {base_url}/products/all/type?token={token}`: the user's
//!   available products, authenticated by token
//! - `GET {base_url}/recipes/all`: the full recipe catalog
//!
//! Both bodies are returned as raw JSON strings; decoding them into
//! domain types is the orchestrator's job.

use reqwest::Client;
use tracing::debug;

use crate::error::{Result, UpstreamError};

/// Client for the upstream catalog service.
///
/// Cheap to clone: the inner reqwest client shares its connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: String,
    client: Client,
}

impl UpstreamClient {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Fetch the user's product list, authenticated by `token`.
    pub async fn fetch_products(&self, token: &str) -> Result<String> {
        let url = format!("{}/products/all/type?token={}", self.base_url, token);
        self.get(url, "products").await
    }

    /// Fetch the full recipe catalog. No authentication required.
    pub async fn fetch_recipes(&self) -> Result<String> {
        let url = format!("{}/recipes/all", self.base_url);
        self.get(url, "recipes").await
    }

    /// Fetch products and recipes concurrently.
    ///
    /// Both requests run to completion before either error propagates;
    /// there is no retry on failure.
    pub async fn fetch_catalog(&self, token: &str) -> Result<(String, String)> {
        let (products, recipes) = tokio::join!(self.fetch_products(token), self.fetch_recipes());
        Ok((products?, recipes?))
    }

    async fn get(&self, url: String, endpoint: &'static str) -> Result<String> {
        debug!(endpoint, "Fetching upstream payload");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { endpoint, status });
        }

        response
            .text()
            .await
            .map_err(|source| UpstreamError::Transport { endpoint, source })
    }
}
