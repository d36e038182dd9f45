//! Response parser — envelope → `SuggestionList`.
//!
//! DESIGN
//! ======
//! Pure and fail-soft: any malformed input yields an empty list, never an
//! error. Extraction follows one fixed path,
//! `candidates[0].content.parts[0].text`. The text is treated as a JSON
//! array possibly wrapped in Markdown code fences.
//!
//! Elements are checked individually: anything that is not an object with
//! non-blank `title` and `briefOverview` strings is dropped, and the rest of
//! the array is kept.

use serde_json::Value;
use tracing::warn;

use crate::suggestion::{SuggestionList, TitleSuggestion};

const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Removed wherever they occur. At each position the first matching marker wins.
const FENCE_MARKERS: [&str; 4] = ["```json\n", "\n```", "```json", "```"];

/// Extract and decode the suggestions carried by `envelope`.
#[must_use]
pub fn parse_envelope(envelope: &Value) -> SuggestionList {
    let Some(text) = envelope_text(envelope) else {
        warn!("parse: envelope has no candidates[0].content.parts[0].text");
        return Vec::new();
    };

    let payload = strip_code_fences(text);
    let decoded: Value = match serde_json::from_str(&payload) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, payload_len = payload.len(), "parse: payload is not valid JSON");
            return Vec::new();
        }
    };

    let Value::Array(items) = decoded else {
        warn!("parse: payload is not a JSON array");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<TitleSuggestion>(item) {
            Ok(suggestion) if suggestion.is_complete() => Some(suggestion),
            Ok(_) => {
                warn!(index, "parse: dropping suggestion with blank field");
                None
            }
            Err(e) => {
                warn!(index, error = %e, "parse: dropping malformed suggestion");
                None
            }
        })
        .collect()
}

fn envelope_text(envelope: &Value) -> Option<&str> {
    envelope
        .pointer(TEXT_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Remove Markdown fence markers (```` ```json ````, ```` ``` ````) from `text`.
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(marker) = FENCE_MARKERS.iter().find(|m| rest.starts_with(**m)) {
            rest = &rest[marker.len()..];
            continue;
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
