use super::*;
use serde_json::json;

#[test]
fn generate_request_serializes_single_text_part() {
    let body = GenerateContentRequest::from_prompt("hello".into());
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value, json!({ "contents": [{ "parts": [{ "text": "hello" }] }] }));
}

#[test]
fn proxy_request_uses_camel_case_field() {
    let value = serde_json::to_value(ProxyRequest { user_input: "AI ethics" }).unwrap();
    assert_eq!(value, json!({ "userInput": "AI ethics" }));
}

#[test]
fn upstream_error_message_carries_status() {
    let err = SuggestError::Upstream { status: 500, body: "boom".into() };
    assert_eq!(err.to_string(), "API request failed with status: 500");
    assert_eq!(err.error_code(), "E_UPSTREAM");
}

#[test]
fn missing_key_error_names_variable() {
    let err = SuggestError::MissingApiKey { var: "GEMINI_API_KEY".into() };
    assert!(err.to_string().contains("GEMINI_API_KEY"));
    assert_eq!(err.error_code(), "E_MISSING_API_KEY");
}

#[test]
fn error_codes_are_distinct() {
    let errors = [
        SuggestError::ConfigParse(String::new()),
        SuggestError::MissingApiKey { var: String::new() },
        SuggestError::Transport(String::new()),
        SuggestError::Upstream { status: 404, body: String::new() },
        SuggestError::Decode(String::new()),
        SuggestError::HttpClientBuild(String::new()),
    ];
    let mut codes: Vec<_> = errors.iter().map(ErrorCode::error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}
