//! HTTP feed
//!
//! Fetches the snapshot and outbox over HTTP for deployments where the agent
//! publishes its data directory behind a static file server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::ports::feed::{index_posts, FeedError, OutboxFeed, SnapshotFeed};

use super::fs::{INDEX_FILE, MEMORY_FILE, OUTBOX_DIR};

/// HTTP feed configuration
#[derive(Debug, Clone)]
pub struct HttpFeedConfig {
    /// Base URL of the published agent data directory
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpFeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Feed over a published agent data directory.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    config: HttpFeedConfig,
    http: Client,
}

impl HttpFeed {
    /// Create a new HTTP feed for the given base URL.
    pub fn new(base_url: String) -> Result<Self, FeedError> {
        Self::with_config(HttpFeedConfig {
            base_url,
            ..HttpFeedConfig::default()
        })
    }

    /// Create a new HTTP feed with custom configuration.
    pub fn with_config(config: HttpFeedConfig) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FeedError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn fetch_text(&self, path: &str) -> Result<String, FeedError> {
        let url = self.url(path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Http(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FeedError::NotFound(url)),
            status if !status.is_success() => {
                Err(FeedError::Http(format!("{} returned {}", url, status)))
            }
            _ => response
                .text()
                .await
                .map_err(|e| FeedError::Http(e.to_string())),
        }
    }

    async fn fetch_json(&self, path: &str) -> Result<Value, FeedError> {
        let text = self.fetch_text(path).await?;
        serde_json::from_str(&text).map_err(|e| FeedError::Parse(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl SnapshotFeed for HttpFeed {
    async fn fetch_snapshot(&self) -> Result<Value, FeedError> {
        self.fetch_json(MEMORY_FILE).await
    }
}

#[async_trait]
impl OutboxFeed for HttpFeed {
    async fn fetch_index(&self) -> Result<Vec<String>, FeedError> {
        let index = self
            .fetch_json(&format!("{}/{}", OUTBOX_DIR, INDEX_FILE))
            .await?;
        Ok(index_posts(&index))
    }

    async fn fetch_post(&self, name: &str) -> Result<String, FeedError> {
        self.fetch_text(&format!("{}/{}", OUTBOX_DIR, name)).await
    }
}
