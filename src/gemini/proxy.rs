//! Same-origin proxy client. Sends `{ userInput }`; the server adds the key.

use tracing::debug;

use super::config::{GeminiConfig, Timeouts};
use super::types::{Envelope, ProxyRequest, SuggestError, SuggestionSource};
use super::{build_http, read_envelope};

/// Path of the proxy endpoint, shared with the router.
pub const PROXY_PATH: &str = "/api/gemini";

pub struct ProxyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProxyClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(origin: &str, timeouts: Timeouts) -> Result<Self, SuggestError> {
        let http = build_http(timeouts)?;
        Ok(Self { http, endpoint: format!("{}{PROXY_PATH}", origin.trim_end_matches('/')) })
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, SuggestError> {
        Self::new(&config.proxy_url, config.timeouts)
    }
}

#[async_trait::async_trait]
impl SuggestionSource for ProxyClient {
    async fn request_suggestions(&self, query: &str) -> Result<Envelope, SuggestError> {
        debug!(query_len = query.len(), endpoint = %self.endpoint, "gemini: proxy request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&ProxyRequest { user_input: query })
            .send()
            .await?;

        read_envelope(response).await
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
