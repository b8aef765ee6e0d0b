//! cryptonews
//!
//! Client for the [Free Crypto News](https://free-crypto-news.vercel.app) API.
//! No API key is required.
//!
//! Overview
//! - One method per endpoint: latest, search, DeFi, Bitcoin, breaking, sources.
//! - Each call is one GET to `{base_url}{path}`; the JSON body is decoded and the
//!   `articles` (or `sources`) list is returned.
//! - Records are kept as the server sent them ([`Article`], [`Source`]) with typed
//!   accessors for the common keys.
//! - No retry, caching, or rate limiting. Failures surface as [`NewsError`] and
//!   can be classified with [`NewsError::kind`].
//!
//! Clients
//! - [`CryptoNews`]: async, on reqwest's async client (any Tokio 1.x runtime).
//! - [`blocking::CryptoNews`] (feature `blocking`, on by default): same surface,
//!   blocking calls.
//!
//! Features
//! - `blocking`: the blocking client.
//! - `tracing`: spans around each request, warnings on non-2xx statuses.
//!
//! Examples
//! ```rust,no_run
//! use cryptonews::{CryptoNews, KnownSource};
//!
//! # async fn run() -> Result<(), cryptonews::NewsError> {
//! let news = CryptoNews::new();
//! for article in news.get_latest(10, Some(KnownSource::CoinDesk.slug())).await? {
//!     println!("{} - {}", article.title().unwrap_or(""), article.source().unwrap_or(""));
//! }
//!
//! let etf = news.search("bitcoin,etf", 5).await?;
//! println!("{} ETF stories", etf.len());
//! # Ok(())
//! # }
//! ```
//!
//! Self-hosted deployments:
//! ```rust,no_run
//! use std::time::Duration;
//!
//! # fn run() -> Result<(), cryptonews::NewsError> {
//! let news = cryptonews::CryptoNews::builder()
//!     .base_url("http://localhost:3000")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! # let _ = news;
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

mod macros;

mod builder;
mod client;
mod decode;
mod endpoint;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use builder::CryptoNewsBuilder;
pub use client::CryptoNews;
pub use endpoint::{Endpoint, encode_query_value};

pub use cryptonews_types::{
    Article, ClientConfig, Collection, DEFAULT_BASE_URL, DEFAULT_BREAKING_LIMIT, DEFAULT_LIMIT,
    ErrorKind, KnownSource, NewsError, NewsFeed, Record, Source,
};

/// Latest articles from the public deployment.
///
/// Shorthand for `CryptoNews::new().get_latest(limit, None)`.
///
/// # Errors
/// See [`CryptoNews::get_latest`].
pub async fn get_crypto_news(limit: u32) -> Result<Vec<Article>, NewsError> {
    CryptoNews::new().get_latest(limit, None).await
}

/// Search the public deployment.
///
/// Shorthand for `CryptoNews::new().search(keywords, limit)`.
///
/// # Errors
/// See [`CryptoNews::search`].
pub async fn search_crypto_news(keywords: &str, limit: u32) -> Result<Vec<Article>, NewsError> {
    CryptoNews::new().search(keywords, limit).await
}
