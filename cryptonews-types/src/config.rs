//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public deployment of the Free Crypto News API.
pub const DEFAULT_BASE_URL: &str = "https://free-crypto-news.vercel.app";

/// Default `limit` for latest, search, DeFi, and Bitcoin listings.
pub const DEFAULT_LIMIT: u32 = 10;

/// Default `limit` for breaking news.
pub const DEFAULT_BREAKING_LIMIT: u32 = 5;

/// Settings a client is built from.
///
/// `base_url` is prepended verbatim to every endpoint path, so it must not end
/// with a slash. Nothing here can change once a client is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host (and optional path prefix) of the API.
    pub base_url: String,
    /// Optional whole-request timeout. `None` waits for the transport.
    #[serde(with = "opt_millis", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
    /// Optional `User-Agent` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another deployment.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

// Timeouts travel as integer milliseconds.
mod opt_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}
