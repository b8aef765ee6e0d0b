//! Canned response bodies, one per endpoint.

mod articles;
mod sources;

pub use articles::{bitcoin_body, breaking_body, defi_body, latest_body, search_body};
pub use sources::sources_body;
