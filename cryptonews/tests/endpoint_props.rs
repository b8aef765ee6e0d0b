use cryptonews::{Endpoint, encode_query_value};
use proptest::prelude::*;

proptest! {
    #[test]
    fn latest_path_carries_exactly_the_limit(limit in any::<u32>()) {
        let path = Endpoint::Latest { limit, source: None }.path();
        prop_assert_eq!(path, format!("/api/news?limit={limit}"));
    }

    #[test]
    fn source_follows_limit(limit in any::<u32>(), source in "[a-z]{1,16}") {
        let path = Endpoint::Latest { limit, source: Some(source.as_str()) }.path();
        let expected = format!("/api/news?limit={limit}&source={source}");
        prop_assert_eq!(path, expected);
    }

    #[test]
    fn encoded_keywords_are_query_safe(keywords in "\\PC{0,32}") {
        let encoded = encode_query_value(&keywords);
        prop_assert!(encoded
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"-._~%".contains(&b)));
    }

    #[test]
    fn search_path_shape(keywords in "[a-z, ]{0,24}", limit in 1u32..=30) {
        let path = Endpoint::Search { keywords: &keywords, limit }.path();
        let expected = format!("/api/search?q={}&limit={limit}", encode_query_value(&keywords));
        prop_assert_eq!(path, expected);
    }
}
