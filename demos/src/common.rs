use std::ops::Deref;

use cryptonews::{Article, CryptoNews};
use cryptonews_mock::MockNewsServer;

/// Set to run demos against the in-process mock instead of the public API.
pub const USE_MOCK_ENV: &str = "CRYPTONEWS_DEMOS_USE_MOCK";

/// A client plus the mock server it may be pointed at.
///
/// The server lives as long as the handle does.
pub struct DemoClient<C> {
    client: C,
    _mock: Option<MockNewsServer>,
}

impl<C> Deref for DemoClient<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.client
    }
}

fn use_mock() -> bool {
    let enabled = std::env::var_os(USE_MOCK_ENV).is_some();
    if enabled {
        println!("--- (Using mock server for CI) ---");
    }
    enabled
}

/// Async client for demos.
pub async fn client() -> DemoClient<CryptoNews> {
    if use_mock() {
        let mock = MockNewsServer::start_async().await;
        DemoClient {
            client: mock.client(),
            _mock: Some(mock),
        }
    } else {
        DemoClient {
            client: CryptoNews::new(),
            _mock: None,
        }
    }
}

/// Blocking client for demos. Must be called outside an async runtime.
#[must_use]
pub fn blocking_client() -> DemoClient<cryptonews::blocking::CryptoNews> {
    if use_mock() {
        let mock = MockNewsServer::start();
        DemoClient {
            client: mock.blocking_client(),
            _mock: Some(mock),
        }
    } else {
        DemoClient {
            client: cryptonews::blocking::CryptoNews::new(),
            _mock: None,
        }
    }
}

/// Print one article the way the SDK demos do: title, then link, then outlet and age.
pub fn print_article(article: &Article) {
    println!();
    println!("* {}", article.title().unwrap_or("(untitled)"));
    println!("  {}", article.link().unwrap_or("-"));
    println!(
        "  {} | {}",
        article.source().unwrap_or("unknown source"),
        article.time_ago().unwrap_or("")
    );
}
