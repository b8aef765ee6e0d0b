use std::string::FromUtf8Error;

use thiserror::Error;

/// Unified error type for the cryptonews workspace.
///
/// Every failure is local to one call and surfaced as-is: nothing is retried and
/// no partial result is returned. `endpoint` fields carry the short endpoint
/// label (e.g. "news", "search", "sources").
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NewsError {
    /// The request could not be sent or the response body could not be read
    /// (DNS, connect, TLS, timeout, reset).
    #[error("{endpoint} request failed: {source}")]
    Http {
        /// Endpoint label.
        endpoint: &'static str,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint label.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The response body is not valid UTF-8.
    #[error("{endpoint} response is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// Endpoint label.
        endpoint: &'static str,
        /// Underlying decoding error.
        #[source]
        source: FromUtf8Error,
    },

    /// The response body is not valid JSON.
    #[error("{endpoint} response is not valid JSON: {source}")]
    Decode {
        /// Endpoint label.
        endpoint: &'static str,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The decoded body lacks the expected top-level key.
    #[error("{endpoint} response has no `{field}` field")]
    MissingField {
        /// Endpoint label.
        endpoint: &'static str,
        /// Missing key (`articles` or `sources`).
        field: &'static str,
    },

    /// The expected key is present but does not hold a list of objects.
    #[error("{endpoint} response field `{field}` has an unexpected shape: {msg}")]
    UnexpectedShape {
        /// Endpoint label.
        endpoint: &'static str,
        /// Offending key.
        field: &'static str,
        /// Human-readable description.
        msg: String,
    },

    /// Invalid caller input (base URL, source slug, endpoint choice).
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

/// Coarse classification of a [`NewsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Transport failure or non-2xx status.
    Transport,
    /// Body is not UTF-8 or not JSON.
    Decode,
    /// Body is JSON but lacks the expected list.
    Schema,
    /// Caller supplied something unusable.
    InvalidInput,
}

impl NewsError {
    /// Helper: build an `Http` error.
    #[must_use]
    pub fn http(endpoint: &'static str, source: reqwest::Error) -> Self {
        Self::Http { endpoint, source }
    }

    /// Helper: build a `Status` error.
    #[must_use]
    pub const fn status(endpoint: &'static str, status: u16) -> Self {
        Self::Status { endpoint, status }
    }

    /// Helper: build a `MissingField` error.
    #[must_use]
    pub const fn missing_field(endpoint: &'static str, field: &'static str) -> Self {
        Self::MissingField { endpoint, field }
    }

    /// Helper: build an `UnexpectedShape` error.
    pub fn unexpected_shape(
        endpoint: &'static str,
        field: &'static str,
        msg: impl Into<String>,
    ) -> Self {
        Self::UnexpectedShape {
            endpoint,
            field,
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. } | Self::Status { .. } => ErrorKind::Transport,
            Self::InvalidUtf8 { .. } | Self::Decode { .. } => ErrorKind::Decode,
            Self::MissingField { .. } | Self::UnexpectedShape { .. } => ErrorKind::Schema,
            Self::InvalidArg(_) => ErrorKind::InvalidInput,
        }
    }

    /// True for transport failures and non-2xx statuses.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transport)
    }

    /// True when the body could not be decoded as UTF-8 JSON.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self.kind(), ErrorKind::Decode)
    }

    /// True when the JSON body does not carry the expected list.
    #[must_use]
    pub const fn is_schema_mismatch(&self) -> bool {
        matches!(self.kind(), ErrorKind::Schema)
    }

    /// Endpoint label the error is attributed to, if any.
    #[must_use]
    pub const fn endpoint(&self) -> Option<&'static str> {
        match self {
            Self::Http { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::InvalidUtf8 { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::MissingField { endpoint, .. }
            | Self::UnexpectedShape { endpoint, .. } => Some(*endpoint),
            Self::InvalidArg(_) => None,
        }
    }

    /// HTTP status for `Status` errors, or the status reqwest attached to an `Http` error.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
