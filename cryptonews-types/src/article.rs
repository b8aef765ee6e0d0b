//! News article record.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Record, str_field};

/// One news item as returned by the API.
///
/// The schema belongs to the server, so every field of the decoded object is
/// kept (in wire order) and serializes back unchanged. The accessors below cover
/// the keys the public deployment emits; anything else is reachable through
/// [`Article::get`] or the `Deref` to the underlying map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Article(Record);

impl Article {
    /// Headline, if present and a string.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        str_field(&self.0, "title")
    }

    /// Link to the full story.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        str_field(&self.0, "link")
    }

    /// Outlet name as reported by the server (e.g. "CoinDesk").
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        str_field(&self.0, "source")
    }

    /// Human-readable age of the story (wire key `timeAgo`, e.g. "5m ago").
    #[must_use]
    pub fn time_ago(&self) -> Option<&str> {
        str_field(&self.0, "timeAgo")
    }

    /// Raw value for an arbitrary key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Record {
        &self.0
    }

    /// Consume the article and return the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Record {
        self.0
    }
}

impl Deref for Article {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Record> for Article {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

impl From<Article> for Value {
    fn from(article: Article) -> Self {
        Self::Object(article.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors_read_known_keys() {
        let article: Article = serde_json::from_value(json!({
            "title": "ETF inflows hit record",
            "link": "https://example.com/etf",
            "source": "CoinDesk",
            "timeAgo": "12m ago",
            "category": "markets"
        }))
        .unwrap();

        assert_eq!(article.title(), Some("ETF inflows hit record"));
        assert_eq!(article.link(), Some("https://example.com/etf"));
        assert_eq!(article.source(), Some("CoinDesk"));
        assert_eq!(article.time_ago(), Some("12m ago"));
        assert_eq!(article.get("category"), Some(&json!("markets")));
    }

    #[test]
    fn non_string_values_are_not_coerced() {
        let article: Article = serde_json::from_value(json!({ "title": 42 })).unwrap();
        assert_eq!(article.title(), None);
        assert_eq!(article.get("title"), Some(&json!(42)));
    }

    #[test]
    fn serializes_back_to_the_same_object() {
        let raw = json!({ "timeAgo": "1h ago", "title": "A", "extra": { "nested": [1, 2] } });
        let article: Article = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&article).unwrap(), raw);
        let keys: Vec<&str> = article.keys().map(String::as_str).collect();
        assert_eq!(keys, ["timeAgo", "title", "extra"]);
    }
}
