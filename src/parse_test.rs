use super::*;
use crate::state::test_helpers::envelope_with_text;
use serde_json::json;

fn suggestion(title: &str, overview: &str) -> TitleSuggestion {
    TitleSuggestion { title: title.into(), brief_overview: overview.into() }
}

// =============================================================================
// Envelope path
// =============================================================================

#[test]
fn parse_single_suggestion() {
    let envelope = json!({
        "candidates": [{ "content": { "parts": [{ "text": "[{\"title\":\"T1\",\"briefOverview\":\"O1\"}]" }] } }]
    });
    assert_eq!(parse_envelope(&envelope), vec![suggestion("T1", "O1")]);
}

#[test]
fn parse_missing_path_segments_returns_empty() {
    let cases = [
        json!({}),
        json!(null),
        json!("text"),
        json!({ "candidates": [] }),
        json!({ "candidates": [{}] }),
        json!({ "candidates": [{ "content": {} }] }),
        json!({ "candidates": [{ "content": { "parts": [] } }] }),
        json!({ "candidates": [{ "content": { "parts": [{}] } }] }),
        json!({ "candidates": [{ "content": { "parts": [{ "text": 42 }] } }] }),
        json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }),
    ];
    for envelope in &cases {
        assert!(parse_envelope(envelope).is_empty(), "expected empty for {envelope}");
    }
}

#[test]
fn parse_reads_only_first_candidate_and_part() {
    let envelope = json!({
        "candidates": [
            { "content": { "parts": [
                { "text": "[{\"title\":\"A\",\"briefOverview\":\"a\"}]" },
                { "text": "[{\"title\":\"B\",\"briefOverview\":\"b\"}]" }
            ] } },
            { "content": { "parts": [{ "text": "[{\"title\":\"C\",\"briefOverview\":\"c\"}]" }] } }
        ]
    });
    assert_eq!(parse_envelope(&envelope), vec![suggestion("A", "a")]);
}

#[test]
fn parse_preserves_upstream_order_and_duplicates() {
    let text = r#"[{"title":"B","briefOverview":"2"},{"title":"A","briefOverview":"1"},{"title":"B","briefOverview":"2"}]"#;
    let parsed = parse_envelope(&envelope_with_text(text));
    assert_eq!(parsed, vec![suggestion("B", "2"), suggestion("A", "1"), suggestion("B", "2")]);
}

// =============================================================================
// Code fences
// =============================================================================

#[test]
fn fenced_payload_matches_unwrapped() {
    let bare = r#"[{"title":"T","briefOverview":"O"},{"title":"T2","briefOverview":"O2"}]"#;
    let wrappings = [
        format!("```json\n{bare}\n```"),
        format!("```\n{bare}\n```"),
        format!("```json{bare}```"),
        format!("```json\n{bare}\n```\n"),
    ];
    let expected = parse_envelope(&envelope_with_text(bare));
    assert_eq!(expected.len(), 2);
    for wrapped in &wrappings {
        assert_eq!(parse_envelope(&envelope_with_text(wrapped)), expected, "wrapping {wrapped:?}");
    }
}

#[test]
fn strip_code_fences_removes_every_marker() {
    assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
    assert_eq!(strip_code_fences("```[1]```"), "[1]");
    assert_eq!(strip_code_fences("a```b```c"), "abc");
}

#[test]
fn strip_code_fences_prefers_first_marker_at_position() {
    // "\n```" wins at the newline, so the language tag survives.
    assert_eq!(strip_code_fences("\n```json\n"), "json\n");
}

#[test]
fn strip_code_fences_leaves_plain_text() {
    assert_eq!(strip_code_fences("[{\"title\":\"naïve — ok\"}]"), "[{\"title\":\"naïve — ok\"}]");
    assert_eq!(strip_code_fences(""), "");
}

// =============================================================================
// Fail-soft decoding
// =============================================================================

#[test]
fn invalid_json_returns_empty() {
    for text in ["not json", "[{\"title\":", "Here are your titles: [", "{{}}", "```json\n[\n```oops"] {
        assert!(parse_envelope(&envelope_with_text(text)).is_empty(), "expected empty for {text:?}");
    }
}

#[test]
fn non_array_payload_returns_empty() {
    for text in [r#"{"title":"T","briefOverview":"O"}"#, "\"just a string\"", "42", "null"] {
        assert!(parse_envelope(&envelope_with_text(text)).is_empty(), "expected empty for {text:?}");
    }
}

#[test]
fn empty_array_returns_empty() {
    assert!(parse_envelope(&envelope_with_text("[]")).is_empty());
}

#[test]
fn malformed_elements_are_dropped() {
    let text = r#"[
        {"title":"Good","briefOverview":"Fine"},
        {"title":"No overview"},
        {"title":1,"briefOverview":"numeric title"},
        "bare string",
        {"title":"  ","briefOverview":"blank title"},
        {"title":"Also good","briefOverview":"Kept","extra":true}
    ]"#;
    let parsed = parse_envelope(&envelope_with_text(text));
    assert_eq!(parsed, vec![suggestion("Good", "Fine"), suggestion("Also good", "Kept")]);
}

#[test]
fn parse_is_deterministic() {
    let envelope = envelope_with_text("```json\n[{\"title\":\"T\",\"briefOverview\":\"O\"}]\n```");
    assert_eq!(parse_envelope(&envelope), parse_envelope(&envelope));
}
