//! Direct `generateContent` client.
//!
//! Thin HTTP wrapper for `/v1beta/models/{model}:generateContent`. The key
//! rides in the `key` query parameter, so this shape is only safe with a
//! public-scoped credential or on the server side of the proxy.

use tracing::debug;

use super::config::{GeminiConfig, Timeouts};
use super::types::{Envelope, GenerateContentRequest, SuggestError, SuggestionSource};
use super::{build_http, prompt, read_envelope};

pub struct DirectClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl DirectClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, base_url: &str, model: &str, timeouts: Timeouts) -> Result<Self, SuggestError> {
        let http = build_http(timeouts)?;
        Ok(Self { http, endpoint: generate_endpoint(base_url, model), api_key })
    }

    /// # Errors
    ///
    /// Returns [`SuggestError::MissingApiKey`] when no key is configured.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, SuggestError> {
        let api_key = config.require_api_key()?.to_string();
        Self::new(api_key, &config.base_url, &config.model, config.timeouts)
    }
}

#[async_trait::async_trait]
impl SuggestionSource for DirectClient {
    async fn request_suggestions(&self, query: &str) -> Result<Envelope, SuggestError> {
        let body = GenerateContentRequest::from_prompt(prompt::render(query));
        debug!(query_len = query.len(), "gemini: direct generateContent request");

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        read_envelope(response).await
    }
}

fn generate_endpoint(base_url: &str, model: &str) -> String {
    format!("{}/v1beta/models/{model}:generateContent", base_url.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "direct_test.rs"]
mod tests;
