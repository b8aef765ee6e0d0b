use cryptonews::KnownSource;
use serde_json::{Value, json};

/// Body of `/api/sources`, one entry per known outlet.
#[must_use]
pub fn sources_body() -> Value {
    let sources: Vec<Value> = KnownSource::ALL
        .into_iter()
        .map(|k| {
            json!({
                "key": k.slug(),
                "name": k.display_name(),
                "status": "active",
            })
        })
        .collect();
    json!({ "sources": sources })
}
