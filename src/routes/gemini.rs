//! Gemini proxy route — `POST /api/gemini`.
//!
//! Validates `{ userInput }`, forwards the fixed instruction upstream with the
//! server-held key, and relays the envelope. Every failure is answered with
//! `{ "error": string }`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::error::ErrorCode;
use crate::gemini::{Envelope, SuggestError};
use crate::state::AppState;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API key not configured")]
    NotConfigured,
    #[error("Invalid request: userInput is required")]
    InvalidInput,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error(transparent)]
    Upstream(#[from] SuggestError),
}

impl ErrorCode for ProxyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "E_NOT_CONFIGURED",
            Self::InvalidInput => "E_INVALID_INPUT",
            Self::MalformedBody(_) => "E_MALFORMED_BODY",
            Self::Upstream(e) => e.error_code(),
        }
    }
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Upstream(SuggestError::Upstream { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::NotConfigured | Self::MalformedBody(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand to the browser.
    fn public_message(&self) -> String {
        match self {
            Self::NotConfigured | Self::InvalidInput | Self::Upstream(SuggestError::Upstream { .. }) => {
                self.to_string()
            }
            Self::MalformedBody(_) | Self::Upstream(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}

// =============================================================================
// HANDLER
// =============================================================================

/// `POST /api/gemini`: relay a suggestion request upstream.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    match relay(&state, &body).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => {
            match &e {
                ProxyError::InvalidInput => warn!(code = e.error_code(), "proxy: rejected request"),
                ProxyError::Upstream(SuggestError::Upstream { status, body }) => {
                    warn!(code = e.error_code(), status, upstream_body = %body, "proxy: upstream error");
                }
                _ => error!(code = e.error_code(), error = %e, "proxy: request failed"),
            }
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, body: &[u8]) -> Result<Envelope, ProxyError> {
    let upstream = state.upstream.as_ref().ok_or(ProxyError::NotConfigured)?;
    let user_input = extract_user_input(body)?;

    info!(input_len = user_input.len(), "proxy: forwarding request");
    let envelope = upstream.request_suggestions(&user_input).await?;
    Ok(envelope)
}

/// Pull a non-empty `userInput` string out of a JSON request body.
fn extract_user_input(body: &[u8]) -> Result<String, ProxyError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| ProxyError::MalformedBody(e.to_string()))?;
    value
        .get("userInput")
        .and_then(Value::as_str)
        .filter(|input| !input.is_empty())
        .map(str::to_string)
        .ok_or(ProxyError::InvalidInput)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
