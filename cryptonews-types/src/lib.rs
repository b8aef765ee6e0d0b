//! Data transfer objects, configuration primitives, and the error type shared by
//! the `cryptonews` client and its mock server.
//!
//! Records returned by the API are owned by the server. `Article` and `Source`
//! keep the decoded JSON object as-is and only add typed accessors for the keys
//! the public deployment is known to emit.
#![warn(missing_docs)]

mod article;
mod config;
mod error;
mod feed;
mod source;

pub use article::Article;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_BREAKING_LIMIT, DEFAULT_LIMIT};
pub use error::{ErrorKind, NewsError};
pub use feed::{Collection, NewsFeed};
pub use source::{KnownSource, Source};

/// Raw JSON object backing `Article` and `Source`.
pub type Record = serde_json::Map<String, serde_json::Value>;

pub(crate) fn str_field<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record.get(key).and_then(serde_json::Value::as_str)
}
