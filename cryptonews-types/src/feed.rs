//! Response envelopes.

use serde::{Deserialize, Serialize};

use crate::{Article, Record};

/// Top-level key an endpoint's payload is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// `articles`, used by every news listing.
    Articles,
    /// `sources`, used by `/api/sources`.
    Sources,
}

impl Collection {
    /// JSON key holding the list.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Sources => "sources",
        }
    }
}

/// Full body of an article listing.
///
/// Besides `articles` the server reports how many items matched and which
/// outlets contributed. Keys this type does not name end up in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsFeed {
    /// Articles, in server order.
    pub articles: Vec<Article>,
    /// Number of matching articles reported by the server.
    #[serde(rename = "totalCount", default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// Names of the outlets that contributed to this listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    /// Every other top-level key.
    #[serde(flatten)]
    pub extra: Record,
}

impl NewsFeed {
    /// Number of articles actually returned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// True when the listing carries no articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
