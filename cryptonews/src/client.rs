use cryptonews_types::{DEFAULT_BASE_URL, NewsError};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::builder::CryptoNewsBuilder;
use crate::macros::news_operations;
use crate::{Endpoint, decode};

/// Async client for the Free Crypto News API.
///
/// Holds only the base URL and a reqwest connection pool handle, so it is cheap
/// to clone and safe to share across tasks. Every operation issues exactly one
/// GET request; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct CryptoNews {
    base_url: String,
    http: reqwest::Client,
}

impl Default for CryptoNews {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoNews {
    /// Client for the public deployment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for a self-hosted deployment. `base_url` is used verbatim and
    /// should not end with a slash.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::from_parts(base_url.into(), reqwest::Client::new())
    }

    /// Returns a builder for timeouts, user agent, or a custom HTTP client.
    #[must_use]
    pub fn builder() -> CryptoNewsBuilder {
        CryptoNewsBuilder::new()
    }

    pub(crate) const fn from_parts(base_url: String, http: reqwest::Client) -> Self {
        Self { base_url, http }
    }

    /// Base URL every endpoint path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `base_url + path`, read the whole body, decode it as UTF-8 JSON.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cryptonews::client",
            skip(self, endpoint),
            fields(endpoint = endpoint.name(), path = %endpoint.path()),
        )
    )]
    async fn fetch(&self, endpoint: &Endpoint<'_>) -> Result<Value, NewsError> {
        let name = endpoint.name();
        let response = self
            .http
            .get(endpoint.url(&self.base_url))
            .send()
            .await
            .map_err(|e| NewsError::http(name, e))?;

        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::warn!(status = status.as_u16(), "non-success status");
            return Err(NewsError::status(name, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NewsError::http(name, e))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = body.len(), "response body read");
        decode::parse_body(name, body.to_vec())
    }

    async fn list<T: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> Result<Vec<T>, NewsError> {
        let body = self.fetch(endpoint).await?;
        decode::take_collection(endpoint.name(), body, endpoint.collection())
    }

    news_operations!(async);
}
