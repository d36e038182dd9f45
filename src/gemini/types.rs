//! Gemini types — wire shapes, the suggestion source trait, and errors.
//!
//! The response envelope is deliberately kept as an untyped
//! `serde_json::Value`: interpreting its shape is the parser's job, not the
//! transport's.

use serde::Serialize;

use crate::error::ErrorCode;

/// Raw, untrusted `generateContent` response body.
pub type Envelope = serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by suggestion source operations.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The upstream credential is not configured.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The request never produced an HTTP response.
    #[error("API request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("API request failed with status: {status}")]
    Upstream { status: u16, body: String },

    /// A success response whose body is not JSON.
    #[error("API response parse failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for SuggestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Upstream { .. } => "E_UPSTREAM",
            Self::Decode(_) => "E_DECODE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

impl From<reqwest::Error> for SuggestError {
    fn from(e: reqwest::Error) -> Self {
        // The direct endpoint carries the key as a query parameter.
        Self::Transport(e.without_url().to_string())
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// `generateContent` request body: `{ contents: [{ parts: [{ text }] }] }`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part.
    #[must_use]
    pub fn from_prompt(text: String) -> Self {
        Self { contents: vec![RequestContent { parts: vec![RequestPart { text }] }] }
    }
}

/// Proxy endpoint request body: `{ "userInput": string }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest<'a> {
    pub user_input: &'a str,
}

// =============================================================================
// SUGGESTION SOURCE TRAIT
// =============================================================================

/// Anything that can turn a query into a raw envelope. Enables mocking in tests.
#[async_trait::async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Issue exactly one request for `query`. Never retries.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Transport`] when no response arrives,
    /// [`SuggestError::Upstream`] on a non-success status, and
    /// [`SuggestError::Decode`] when a success body is not JSON.
    async fn request_suggestions(&self, query: &str) -> Result<Envelope, SuggestError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
