//! Title suggestion — one generated title + overview pair.

use serde::{Deserialize, Serialize};

/// A single generated idea. Wire shape: `{ "title", "briefOverview" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSuggestion {
    pub title: String,
    pub brief_overview: String,
}

/// Suggestions in the order the model returned them. No dedup, no sort.
pub type SuggestionList = Vec<TitleSuggestion>;

impl TitleSuggestion {
    /// Both fields carry visible text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.brief_overview.trim().is_empty()
    }
}
