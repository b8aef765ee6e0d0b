use std::time::Duration;

use cryptonews_types::{ClientConfig, DEFAULT_BASE_URL};

#[test]
fn default_points_at_public_deployment() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert!(cfg.timeout.is_none());
    assert!(cfg.user_agent.is_none());
}

#[test]
fn client_config_roundtrip() {
    let cfg = ClientConfig {
        base_url: "http://localhost:9999".into(),
        timeout: Some(Duration::from_millis(2500)),
        user_agent: Some("news-bot/1.0".into()),
    };

    let json = serde_json::to_string(&cfg).expect("serialize client config");
    let de: ClientConfig = serde_json::from_str(&json).expect("deserialize client config");

    assert_eq!(de, cfg);
}

#[test]
fn timeout_is_expressed_in_millis() {
    let cfg = ClientConfig {
        timeout: Some(Duration::from_secs(3)),
        ..ClientConfig::default()
    };
    let value = serde_json::to_value(&cfg).expect("serialize client config");
    assert_eq!(value["timeout"], 3000);
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let de: ClientConfig =
        serde_json::from_str(r#"{ "user_agent": "x" }"#).expect("deserialize partial config");
    assert_eq!(de.base_url, DEFAULT_BASE_URL);
    assert!(de.timeout.is_none());
    assert_eq!(de.user_agent.as_deref(), Some("x"));
}
