//! Notion record-store client.
//!
//! Implements [`RecordStore`] against the Notion pages API with bearer
//! authentication and a pinned `Notion-Version`. Configuration is injected
//! explicitly; `from_env` is a convenience for the binary's startup path.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, info};

use musebox_core::{Error, NewRecord, RecordPatch, RecordStore, Result};

use crate::types::{CreatePageRequest, PageResponse, UpdatePageRequest};

/// Default Notion API endpoint.
pub const DEFAULT_NOTION_URL: &str = "https://api.notion.com/v1";

/// Notion API version header value.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Notion backend.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    /// Bearer credential (integration token).
    pub api_key: String,
    /// Target database (collection) id for created pages.
    pub database_id: String,
    /// Base URL for the API endpoint (override for tests/proxies).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl NotionConfig {
    /// Read configuration from environment variables.
    ///
    /// `NOTION_API_KEY` and `NOTION_DATABASE_ID` are required; an absent or
    /// empty value is a configuration error naming the variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require_env("NOTION_API_KEY")?,
            database_id: require_env("NOTION_DATABASE_ID")?,
            base_url: std::env::var("NOTION_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_NOTION_URL.to_string()),
            timeout_seconds: std::env::var("NOTION_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::Config(format!("{} is not set", name))),
    }
}

/// Notion implementation of [`RecordStore`].
pub struct NotionStore {
    client: Client,
    config: NotionConfig,
}

impl NotionStore {
    /// Create a new store with the given configuration.
    pub fn new(config: NotionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Request(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            database_id = %config.database_id,
            "Initializing Notion store"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(NotionConfig::from_env()?)
    }

    /// Map a non-2xx response to a request error carrying the body text.
    async fn check(response: Response, operation: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Request(format!(
            "Notion {} returned {}: {}",
            operation, status, body
        )))
    }
}

#[async_trait]
impl RecordStore for NotionStore {
    async fn create(&self, record: &NewRecord) -> Result<String> {
        let payload = CreatePageRequest::from_record(&self.config.database_id, record);

        let response = self
            .client
            .post(format!("{}/pages", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&payload)
            .send()
            .await?;

        let page: PageResponse = Self::check(response, "create").await?.json().await?;
        debug!(record_id = %page.id, "Notion page created");
        Ok(page.id)
    }

    async fn update(&self, record_id: &str, patch: &RecordPatch) -> Result<()> {
        let payload = UpdatePageRequest::from_patch(patch);

        let response = self
            .client
            .patch(format!("{}/pages/{}", self.config.base_url, record_id))
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&payload)
            .send()
            .await?;

        Self::check(response, "update").await?;
        debug!(record_id = %record_id, "Notion page updated");
        Ok(())
    }
}
