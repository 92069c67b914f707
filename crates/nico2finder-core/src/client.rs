//! HTTP transport for the niconico search API
//!
//! The finder only needs "GET this URL with these headers and hand me the
//! body"; [`Transport`] is that seam and [`HttpTransport`] is the reqwest
//! implementation used by default.

use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::error::{FinderError, Result};
use crate::url::API_DOMAIN;

/// Application name sent when the caller doesn't provide one
pub const DEFAULT_APP_NAME: &str = "rust-nico2finder";

/// Configuration for the finder and its HTTP client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Sent as `_context` and `User-Agent` (default: "rust-nico2finder")
    pub app_name: String,
    /// API origin (default: https://api.search.nicovideo.jp)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            base_url: API_DOMAIN.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Performs a single GET and returns the response body as text
///
/// Implementations decide what counts as a failed request; the reqwest one
/// treats any non-2xx status as [`FinderError::Transport`].
pub trait Transport {
    fn get(&self, url: &str, headers: &HeaderMap) -> impl Future<Output = Result<String>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client`
///
/// No retries, no rate limiting: each call is one request/response cycle.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a transport honouring the configured timeout
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FinderError::InvalidConfig(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<String> {
        let response = self
            .client
            .get(url)
            .headers(headers.clone())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "search response received");

        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
