//! News source descriptors.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{NewsError, Record, str_field};

/// One news outlet as listed by `/api/sources`.
///
/// Same policy as [`crate::Article`]: the object is kept whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Source(Record);

impl Source {
    /// Display name of the outlet, if present and a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        str_field(&self.0, "name")
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

    /// Consume the source and return the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Record {
        self.0
    }
}

impl Deref for Source {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Record> for Source {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

impl From<Source> for Value {
    fn from(source: Source) -> Self {
        Self::Object(source.0)
    }
}

/// Outlets aggregated by the public deployment.
///
/// The `source` filter of `/api/news` accepts any string; this enum only names
/// the values the public server is known to understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum KnownSource {
    /// CoinDesk.
    CoinDesk,
    /// The Block.
    TheBlock,
    /// Decrypt.
    Decrypt,
    /// CoinTelegraph.
    CoinTelegraph,
    /// Bitcoin Magazine.
    BitcoinMagazine,
    /// Blockworks.
    Blockworks,
    /// The Defiant.
    Defiant,
}

impl KnownSource {
    /// Every known outlet, in the order the server documents them.
    pub const ALL: [Self; 7] = [
        Self::CoinDesk,
        Self::TheBlock,
        Self::Decrypt,
        Self::CoinTelegraph,
        Self::BitcoinMagazine,
        Self::Blockworks,
        Self::Defiant,
    ];

    /// Value sent as the `source` query parameter.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CoinDesk => "coindesk",
            Self::TheBlock => "theblock",
            Self::Decrypt => "decrypt",
            Self::CoinTelegraph => "cointelegraph",
            Self::BitcoinMagazine => "bitcoinmagazine",
            Self::Blockworks => "blockworks",
            Self::Defiant => "defiant",
        }
    }

    /// Human-readable outlet name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CoinDesk => "CoinDesk",
            Self::TheBlock => "The Block",
            Self::Decrypt => "Decrypt",
            Self::CoinTelegraph => "CoinTelegraph",
            Self::BitcoinMagazine => "Bitcoin Magazine",
            Self::Blockworks => "Blockworks",
            Self::Defiant => "The Defiant",
        }
    }
}

impl fmt::Display for KnownSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for KnownSource {
    type Err = NewsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| NewsError::InvalidArg(format!("unknown news source: {s:?}")))
    }
}

impl From<KnownSource> for &'static str {
    fn from(k: KnownSource) -> Self {
        k.slug()
    }
}
