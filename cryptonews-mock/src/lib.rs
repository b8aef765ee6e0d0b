//! In-process mock of the Free Crypto News API.
//!
//! [`MockNewsServer`] binds a local `httpmock` server and answers every endpoint
//! with the deterministic bodies in [`fixtures`]. Query parameters are accepted
//! but not interpreted: a mock listing is the same whatever `limit` or `source`.

use cryptonews::CryptoNews;
use httpmock::prelude::*;
use serde_json::Value;

pub mod fixtures;

/// Local server answering every endpoint from fixtures.
pub struct MockNewsServer {
    server: MockServer,
}

impl MockNewsServer {
    /// Start a server with every endpoint mounted.
    ///
    /// Blocks on httpmock's own runtime; inside an async context use
    /// [`MockNewsServer::start_async`].
    #[must_use]
    pub fn start() -> Self {
        let server = MockServer::start();
        for (path, body) in routes() {
            server.mock(|when, then| {
                when.method(GET).path(path);
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(body);
            });
        }
        Self { server }
    }

    /// Async variant of [`MockNewsServer::start`].
    pub async fn start_async() -> Self {
        let server = MockServer::start_async().await;
        for (path, body) in routes() {
            server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(200)
                        .header("content-type", "application/json")
                        .json_body(body);
                })
                .await;
        }
        Self { server }
    }

    /// Base URL of the server, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.server.base_url()
    }

    /// Async client pointed at this server.
    #[must_use]
    pub fn client(&self) -> CryptoNews {
        CryptoNews::with_base_url(self.base_url())
    }

    /// Blocking client pointed at this server.
    #[must_use]
    pub fn blocking_client(&self) -> cryptonews::blocking::CryptoNews {
        cryptonews::blocking::CryptoNews::with_base_url(self.base_url())
    }

    /// The underlying `httpmock` server, for mounting additional mocks.
    #[must_use]
    pub const fn inner(&self) -> &MockServer {
        &self.server
    }
}

/// Endpoint path (without query) and the body served for it.
fn routes() -> [(&'static str, Value); 6] {
    [
        ("/api/news", fixtures::latest_body()),
        ("/api/search", fixtures::search_body()),
        ("/api/defi", fixtures::defi_body()),
        ("/api/bitcoin", fixtures::bitcoin_body()),
        ("/api/breaking", fixtures::breaking_body()),
        ("/api/sources", fixtures::sources_body()),
    ]
}
