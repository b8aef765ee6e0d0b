//! Body decoding: bytes to JSON, JSON to the requested list.

use cryptonews_types::{Collection, NewsError, NewsFeed};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a response body as UTF-8 and parse it as JSON.
///
/// # Errors
/// `InvalidUtf8` or `Decode`.
pub fn parse_body(endpoint: &'static str, body: Vec<u8>) -> Result<Value, NewsError> {
    let text =
        String::from_utf8(body).map_err(|source| NewsError::InvalidUtf8 { endpoint, source })?;
    serde_json::from_str(&text).map_err(|source| NewsError::Decode { endpoint, source })
}

/// Pull the list stored under `collection` out of a decoded body.
///
/// A body that is not an object, or an object without the key, is a schema
/// mismatch; it never yields an empty list.
///
/// # Errors
/// `MissingField` or `UnexpectedShape`.
pub fn take_collection<T: DeserializeOwned>(
    endpoint: &'static str,
    body: Value,
    collection: Collection,
) -> Result<Vec<T>, NewsError> {
    let field = collection.key();
    let Value::Object(mut object) = body else {
        return Err(NewsError::missing_field(endpoint, field));
    };
    let list = object
        .remove(field)
        .ok_or_else(|| NewsError::missing_field(endpoint, field))?;
    serde_json::from_value(list)
        .map_err(|e| NewsError::unexpected_shape(endpoint, field, e.to_string()))
}

/// Interpret a decoded body as a full article listing.
///
/// # Errors
/// `MissingField` when `articles` is absent, `UnexpectedShape` when the
/// envelope does not deserialize.
pub fn into_feed(endpoint: &'static str, body: Value) -> Result<NewsFeed, NewsError> {
    let field = Collection::Articles.key();
    if !body.as_object().is_some_and(|o| o.contains_key(field)) {
        return Err(NewsError::missing_field(endpoint, field));
    }
    serde_json::from_value(body)
        .map_err(|e| NewsError::unexpected_shape(endpoint, field, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptonews_types::{Article, Source};
    use serde_json::json;

    #[test]
    fn articles_are_extracted_in_order() {
        let body = parse_body(
            "news",
            br#"{"articles": [{"title": "A"}, {"title": "B"}]}"#.to_vec(),
        )
        .unwrap();
        let articles: Vec<Article> = take_collection("news", body, Collection::Articles).unwrap();
        assert_eq!(
            serde_json::to_value(&articles).unwrap(),
            json!([{ "title": "A" }, { "title": "B" }])
        );
    }

    #[test]
    fn sources_are_extracted() {
        let body = json!({ "sources": [{ "name": "CoinDesk" }] });
        let sources: Vec<Source> = take_collection("sources", body, Collection::Sources).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name(), Some("CoinDesk"));
    }

    #[test]
    fn empty_object_is_a_schema_mismatch() {
        let err = take_collection::<Article>("news", json!({}), Collection::Articles).unwrap_err();
        assert!(matches!(
            err,
            NewsError::MissingField {
                endpoint: "news",
                field: "articles"
            }
        ));
    }

    #[test]
    fn wrong_key_is_a_schema_mismatch() {
        let body = json!({ "articles": [] });
        let err = take_collection::<Source>("sources", body, Collection::Sources).unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn non_object_body_is_a_schema_mismatch() {
        let err =
            take_collection::<Article>("news", json!([1, 2]), Collection::Articles).unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn list_of_scalars_is_an_unexpected_shape() {
        let body = json!({ "articles": ["a", "b"] });
        let err = take_collection::<Article>("news", body, Collection::Articles).unwrap_err();
        assert!(matches!(err, NewsError::UnexpectedShape { .. }));
    }

    #[test]
    fn invalid_utf8_and_json_are_decode_errors() {
        let err = parse_body("news", vec![b'{', 0xff, b'}']).unwrap_err();
        assert!(matches!(err, NewsError::InvalidUtf8 { .. }));

        let err = parse_body("news", b"<html>oops</html>".to_vec()).unwrap_err();
        assert!(matches!(err, NewsError::Decode { .. }));
    }

    #[test]
    fn feed_requires_articles() {
        let err = into_feed("news", json!({ "totalCount": 3 })).unwrap_err();
        assert!(err.is_schema_mismatch());

        let feed = into_feed(
            "news",
            json!({ "articles": [{ "title": "A" }], "totalCount": 1 }),
        )
        .unwrap();
        assert_eq!(feed.total_count, Some(1));
    }
}
