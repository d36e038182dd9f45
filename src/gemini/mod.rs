//! Gemini — suggestion sources backed by the `generateContent` API.
//!
//! DESIGN
//! ======
//! One `SuggestionSource` trait, two implementations selected by
//! `TITLE_SERVICE_MODE`: `DirectClient` calls the provider with the key in the
//! URL, `ProxyClient` calls our own `/api/gemini` endpoint which holds the key
//! server-side. Both surface the envelope unmodified; shape interpretation is
//! left entirely to `crate::parse`.

pub mod config;
pub mod direct;
pub mod prompt;
pub mod proxy;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use config::{GeminiConfig, ServiceMode, Timeouts};
pub use types::{Envelope, SuggestError, SuggestionSource};

// =============================================================================
// SOURCE DISPATCH
// =============================================================================

/// Build the suggestion source selected by `config.mode`.
///
/// # Errors
///
/// Returns an error if direct mode lacks a key or the HTTP client fails.
pub fn source_from_config(config: &GeminiConfig) -> Result<Arc<dyn SuggestionSource>, SuggestError> {
    match config.mode {
        ServiceMode::Direct => Ok(Arc::new(direct::DirectClient::from_config(config)?)),
        ServiceMode::Proxy => Ok(Arc::new(proxy::ProxyClient::from_config(config)?)),
    }
}

// =============================================================================
// SHARED HTTP PLUMBING
// =============================================================================

fn build_http(timeouts: Timeouts) -> Result<reqwest::Client, SuggestError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| SuggestError::HttpClientBuild(e.to_string()))
}

/// Status check + JSON decode shared by both sources.
async fn read_envelope(response: reqwest::Response) -> Result<Envelope, SuggestError> {
    let status = response.status().as_u16();
    let text = response.text().await?;

    if !(200..300).contains(&status) {
        warn!(status, body_len = text.len(), "gemini: backend returned non-success status");
        return Err(SuggestError::Upstream { status, body: text });
    }

    decode_envelope(&text)
}

fn decode_envelope(text: &str) -> Result<Envelope, SuggestError> {
    serde_json::from_str(text).map_err(|e| SuggestError::Decode(e.to_string()))
}
