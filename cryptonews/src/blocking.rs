//! Blocking client.
//!
//! Same operations as the async [`crate::CryptoNews`], backed by
//! `reqwest::blocking`. Each call returns only after the full body has been read
//! and parsed. Do not call it from inside an async runtime; reqwest's blocking
//! client refuses to run there.

use std::time::Duration;

use cryptonews_types::{Article, ClientConfig, DEFAULT_BASE_URL, NewsError};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::builder::validate_base_url;
use crate::macros::news_operations;
use crate::{Endpoint, decode};

/// Blocking client for the Free Crypto News API.
#[derive(Debug, Clone)]
pub struct CryptoNews {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl Default for CryptoNews {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoNews {
    /// Client for the public deployment.
    ///
    /// # Panics
    /// See [`CryptoNews::with_base_url`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for a self-hosted deployment. `base_url` is used verbatim.
    ///
    /// # Panics
    /// Panics if the TLS backend cannot be initialized, like
    /// `reqwest::blocking::Client::new`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        // reqwest's blocking client defaults to a 30s timeout; requests here wait
        // on the transport unless a timeout is configured through the builder.
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .expect("Failed to build blocking reqwest client");
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Returns a builder for timeouts, user agent, or a custom HTTP client.
    #[must_use]
    pub fn builder() -> CryptoNewsBuilder {
        CryptoNewsBuilder::default()
    }

    /// Base URL every endpoint path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cryptonews::blocking",
            skip(self, endpoint),
            fields(endpoint = endpoint.name(), path = %endpoint.path()),
        )
    )]
    fn fetch(&self, endpoint: &Endpoint<'_>) -> Result<Value, NewsError> {
        let name = endpoint.name();
        let response = self
            .http
            .get(endpoint.url(&self.base_url))
            .send()
            .map_err(|e| NewsError::http(name, e))?;

        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::warn!(status = status.as_u16(), "non-success status");
            return Err(NewsError::status(name, status.as_u16()));
        }

        let body = response.bytes().map_err(|e| NewsError::http(name, e))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = body.len(), "response body read");
        decode::parse_body(name, body.to_vec())
    }

    fn list<T: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> Result<Vec<T>, NewsError> {
        let body = self.fetch(endpoint)?;
        decode::take_collection(endpoint.name(), body, endpoint.collection())
    }

    news_operations!(blocking);
}

/// Builder for the blocking [`CryptoNews`].
#[derive(Debug, Default)]
pub struct CryptoNewsBuilder {
    config: ClientConfig,
    http: Option<reqwest::blocking::Client>,
}

impl CryptoNewsBuilder {
    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Point the client at another deployment (no trailing slash).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Bound every request by `timeout`.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Send this `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured blocking HTTP client as-is.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// `InvalidArg` if the base URL is not an absolute http(s) URL, `Http` if the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<CryptoNews, NewsError> {
        validate_base_url(&self.config.base_url)?;
        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder =
                    reqwest::blocking::Client::builder().timeout(self.config.timeout);
                if let Some(ua) = &self.config.user_agent {
                    builder = builder.user_agent(ua.as_str());
                }
                builder.build().map_err(|e| NewsError::http("client", e))?
            }
        };
        Ok(CryptoNews {
            base_url: self.config.base_url,
            http,
        })
    }
}

/// Latest articles from the public deployment.
///
/// # Errors
/// See [`CryptoNews::get_latest`].
pub fn get_crypto_news(limit: u32) -> Result<Vec<Article>, NewsError> {
    CryptoNews::new().get_latest(limit, None)
}

/// Search the public deployment.
///
/// # Errors
/// See [`CryptoNews::search`].
pub fn search_crypto_news(keywords: &str, limit: u32) -> Result<Vec<Article>, NewsError> {
    CryptoNews::new().search(keywords, limit)
}
