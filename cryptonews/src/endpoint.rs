//! Endpoint paths and query-string construction.

use std::fmt::Write as _;

use cryptonews_types::Collection;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in query values: everything but ASCII alphanumerics and
/// the RFC 3986 unreserved marks.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One API operation together with its arguments.
///
/// `limit` is forwarded as-is. The server documents 1-50 for latest news and
/// 1-30 for search, and clamps on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/api/news`: latest articles, optionally filtered by outlet slug.
    Latest {
        /// Maximum number of articles.
        limit: u32,
        /// Outlet filter, inserted unescaped.
        source: Option<&'a str>,
    },
    /// `/api/search`: articles matching comma-separated keywords.
    Search {
        /// Comma-separated search terms.
        keywords: &'a str,
        /// Maximum number of articles.
        limit: u32,
    },
    /// `/api/defi`: DeFi news.
    Defi {
        /// Maximum number of articles.
        limit: u32,
    },
    /// `/api/bitcoin`: Bitcoin news.
    Bitcoin {
        /// Maximum number of articles.
        limit: u32,
    },
    /// `/api/breaking`: news from the last two hours.
    Breaking {
        /// Maximum number of articles.
        limit: u32,
    },
    /// `/api/sources`: every outlet the server aggregates.
    Sources,
}

impl Endpoint<'_> {
    /// Short label used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Latest { .. } => "news",
            Self::Search { .. } => "search",
            Self::Defi { .. } => "defi",
            Self::Bitcoin { .. } => "bitcoin",
            Self::Breaking { .. } => "breaking",
            Self::Sources => "sources",
        }
    }

    /// Top-level key the response lists its records under.
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Sources => Collection::Sources,
            _ => Collection::Articles,
        }
    }

    /// Path and query string, e.g. `/api/news?limit=10&source=coindesk`.
    #[must_use]
    pub fn path(&self) -> String {
        match *self {
            Self::Latest { limit, source } => {
                let mut path = format!("/api/news?limit={limit}");
                if let Some(source) = source.filter(|s| !s.is_empty()) {
                    let _ = write!(path, "&source={source}");
                }
                path
            }
            Self::Search { keywords, limit } => format!(
                "/api/search?q={}&limit={limit}",
                encode_query_value(keywords)
            ),
            Self::Defi { limit } => format!("/api/defi?limit={limit}"),
            Self::Bitcoin { limit } => format!("/api/bitcoin?limit={limit}"),
            Self::Breaking { limit } => format!("/api/breaking?limit={limit}"),
            Self::Sources => "/api/sources".to_string(),
        }
    }

    /// Full request URL. `base_url` is used verbatim; no slash is added or removed.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.path())
    }
}

/// Percent-encode a query value (space becomes `%20`, comma `%2C`).
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_without_source() {
        let e = Endpoint::Latest {
            limit: 10,
            source: None,
        };
        assert_eq!(e.path(), "/api/news?limit=10");
    }

    #[test]
    fn latest_appends_source_after_limit() {
        let e = Endpoint::Latest {
            limit: 7,
            source: Some("coindesk"),
        };
        assert_eq!(e.path(), "/api/news?limit=7&source=coindesk");
    }

    #[test]
    fn empty_source_is_ignored() {
        let e = Endpoint::Latest {
            limit: 3,
            source: Some(""),
        };
        assert_eq!(e.path(), "/api/news?limit=3");
    }

    #[test]
    fn search_encodes_keywords() {
        let e = Endpoint::Search {
            keywords: "bitcoin,etf",
            limit: 5,
        };
        assert_eq!(e.path(), "/api/search?q=bitcoin%2Cetf&limit=5");
    }

    #[test]
    fn search_encodes_spaces_and_reserved() {
        assert_eq!(encode_query_value("spot etf"), "spot%20etf");
        assert_eq!(encode_query_value("a&b=c/d?"), "a%26b%3Dc%2Fd%3F");
        assert_eq!(encode_query_value("layer-2_v1.0~x"), "layer-2_v1.0~x");
        assert_eq!(encode_query_value("€"), "%E2%82%AC");
    }

    #[test]
    fn category_paths() {
        assert_eq!(Endpoint::Defi { limit: 10 }.path(), "/api/defi?limit=10");
        assert_eq!(Endpoint::Bitcoin { limit: 1 }.path(), "/api/bitcoin?limit=1");
        assert_eq!(Endpoint::Breaking { limit: 5 }.path(), "/api/breaking?limit=5");
        assert_eq!(Endpoint::Sources.path(), "/api/sources");
    }

    #[test]
    fn limits_are_not_clamped() {
        assert_eq!(Endpoint::Defi { limit: 0 }.path(), "/api/defi?limit=0");
        assert_eq!(
            Endpoint::Search {
                keywords: "x",
                limit: 500
            }
            .path(),
            "/api/search?q=x&limit=500"
        );
    }

    #[test]
    fn url_concatenates_verbatim() {
        let e = Endpoint::Sources;
        assert_eq!(
            e.url("http://localhost:9999"),
            "http://localhost:9999/api/sources"
        );
        assert_eq!(
            e.url("http://localhost:9999/"),
            "http://localhost:9999//api/sources"
        );
    }

    #[test]
    fn collections() {
        assert_eq!(Endpoint::Sources.collection(), Collection::Sources);
        assert_eq!(
            Endpoint::Breaking { limit: 5 }.collection(),
            Collection::Articles
        );
    }
}
