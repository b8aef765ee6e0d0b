use std::time::Duration;

use cryptonews_types::{ClientConfig, NewsError};
use url::Url;

use crate::CryptoNews;

/// Builder for [`CryptoNews`].
///
/// Start from [`CryptoNews::builder`], adjust, then call `.build()`.
#[derive(Debug, Default)]
pub struct CryptoNewsBuilder {
    config: ClientConfig,
    http: Option<reqwest::Client>,
}

impl CryptoNewsBuilder {
    /// Builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

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

    /// Use a preconfigured HTTP client.
    ///
    /// The client is used as-is: `timeout` and `user_agent` from this builder
    /// are not applied to it.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
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
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.config.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(ua) = &self.config.user_agent {
                    builder = builder.user_agent(ua.as_str());
                }
                builder.build().map_err(|e| NewsError::http("client", e))?
            }
        };
        Ok(CryptoNews::from_parts(self.config.base_url, http))
    }
}

/// Reject base URLs that cannot prefix an endpoint path.
pub(crate) fn validate_base_url(base_url: &str) -> Result<(), NewsError> {
    let parsed = Url::parse(base_url)
        .map_err(|e| NewsError::invalid_arg(format!("base url {base_url:?}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(NewsError::invalid_arg(format!(
            "base url {base_url:?}: unsupported scheme {other:?}"
        ))),
    }
}
