use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<GeminiConfig, SuggestError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    GeminiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_defaults_to_proxy() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.mode, ServiceMode::Proxy);
    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.proxy_url, DEFAULT_PROXY_URL);
    assert_eq!(cfg.timeouts, Timeouts::default());
}

#[test]
fn from_lookup_parses_direct_overrides() {
    let cfg = config_from(&[
        ("TITLE_SERVICE_MODE", "direct"),
        ("GEMINI_API_KEY", "secret"),
        ("GEMINI_MODEL", "gemini-test"),
        ("GEMINI_BASE_URL", "https://example.test/"),
        ("GEMINI_REQUEST_TIMEOUT_SECS", "42"),
        ("GEMINI_CONNECT_TIMEOUT_SECS", "7"),
    ])
    .unwrap();
    assert_eq!(cfg.mode, ServiceMode::Direct);
    assert_eq!(cfg.api_key.as_deref(), Some("secret"));
    assert_eq!(cfg.model, "gemini-test");
    assert_eq!(cfg.base_url, "https://example.test");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn from_lookup_trims_proxy_url() {
    let cfg = config_from(&[("TITLE_PROXY_URL", "http://localhost:8080/")]).unwrap();
    assert_eq!(cfg.proxy_url, "http://localhost:8080");
}

#[test]
fn from_lookup_unknown_mode_errors() {
    let err = config_from(&[("TITLE_SERVICE_MODE", "carrier-pigeon")]).unwrap_err();
    assert!(err.to_string().contains("unknown TITLE_SERVICE_MODE"));
}

#[test]
fn from_lookup_bad_timeout_falls_back_to_default() {
    let cfg = config_from(&[("GEMINI_REQUEST_TIMEOUT_SECS", "soon")]).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn blank_api_key_counts_as_missing() {
    let cfg = config_from(&[("GEMINI_API_KEY", "  ")]).unwrap();
    assert!(cfg.api_key.is_none());
    assert!(matches!(cfg.require_api_key(), Err(SuggestError::MissingApiKey { .. })));
}

#[test]
fn require_api_key_returns_key() {
    let cfg = config_from(&[("GEMINI_API_KEY", "k")]).unwrap();
    assert_eq!(cfg.require_api_key().unwrap(), "k");
}

#[test]
fn debug_output_redacts_key() {
    let cfg = config_from(&[("GEMINI_API_KEY", "super-secret-value")]).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("super-secret-value"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn parse_mode_trims_whitespace() {
    assert_eq!(parse_mode(Some(" direct ")).unwrap(), ServiceMode::Direct);
    assert_eq!(parse_mode(None).unwrap(), ServiceMode::Proxy);
}
