//! Gemini configuration parsed from environment variables.

use std::fmt;

use super::types::SuggestError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// How the client side reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMode {
    /// Call the provider directly; the credential travels with the request.
    Direct,
    /// Call the same-origin proxy, which holds the credential.
    Proxy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub mode: ServiceMode,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub proxy_url: String,
    pub timeouts: Timeouts,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("mode", &self.mode)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("proxy_url", &self.proxy_url)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl GeminiConfig {
    /// Build typed config from environment variables.
    ///
    /// All optional:
    /// - `GEMINI_API_KEY`: credential (required later for direct calls and the proxy)
    /// - `TITLE_SERVICE_MODE`: `proxy` (default) or `direct`
    /// - `TITLE_PROXY_URL`: proxy origin, default `http://127.0.0.1:3000`
    /// - `GEMINI_MODEL`: default `gemini-2.0-flash`
    /// - `GEMINI_BASE_URL`: default Google endpoint
    /// - `GEMINI_REQUEST_TIMEOUT_SECS`: default 120
    /// - `GEMINI_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::ConfigParse`] for an unknown service mode.
    pub fn from_env() -> Result<Self, SuggestError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GeminiConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::ConfigParse`] for an unknown service mode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SuggestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = parse_mode(lookup("TITLE_SERVICE_MODE").as_deref())?;
        let api_key = lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty());
        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = trim_url(lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));
        let proxy_url = trim_url(lookup("TITLE_PROXY_URL").unwrap_or_else(|| DEFAULT_PROXY_URL.to_string()));
        let timeouts = Timeouts {
            request_secs: parse_u64(lookup("GEMINI_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("GEMINI_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { mode, api_key, model, base_url, proxy_url, timeouts })
    }

    /// The credential, or a configuration error naming the variable.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::MissingApiKey`] when no key is configured.
    pub fn require_api_key(&self) -> Result<&str, SuggestError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| SuggestError::MissingApiKey { var: API_KEY_VAR.into() })
    }
}

/// Parse a service mode name; `None` selects the proxy.
///
/// # Errors
///
/// Returns [`SuggestError::ConfigParse`] for anything other than `proxy` or `direct`.
pub fn parse_mode(raw: Option<&str>) -> Result<ServiceMode, SuggestError> {
    match raw.map(str::trim).unwrap_or("proxy") {
        "proxy" => Ok(ServiceMode::Proxy),
        "direct" => Ok(ServiceMode::Direct),
        other => Err(SuggestError::ConfigParse(format!(
            "unknown TITLE_SERVICE_MODE '{other}' (expected 'proxy' or 'direct')"
        ))),
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
