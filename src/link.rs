//! Shareable deep links. The `q` query parameter mirrors the submitted query.

use reqwest::Url;

use crate::error::ErrorCode;

pub const QUERY_PARAM: &str = "q";
pub const DEFAULT_SHARE_BASE: &str = "http://127.0.0.1:3000/";

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("invalid link base '{base}': {reason}")]
    InvalidBase { base: String, reason: String },
}

impl ErrorCode for LinkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBase { .. } => "E_INVALID_LINK_BASE",
        }
    }
}

/// `/?q=<query>` on `base`.
///
/// # Errors
///
/// Returns [`LinkError::InvalidBase`] if `base` is not an absolute URL.
pub fn share_link(base: &str, query: &str) -> Result<String, LinkError> {
    let mut url = root_of(base)?;
    url.query_pairs_mut().append_pair(QUERY_PARAM, query);
    Ok(url.into())
}

/// The bare root, used after a reset.
///
/// # Errors
///
/// Returns [`LinkError::InvalidBase`] if `base` is not an absolute URL.
pub fn reset_link(base: &str) -> Result<String, LinkError> {
    Ok(root_of(base)?.into())
}

/// The query a deep link should auto-submit, if any.
///
/// Accepts absolute URLs as well as relative forms such as `/?q=...` or
/// `?q=...`. An empty `q` triggers nothing.
#[must_use]
pub fn query_from_link(link: &str) -> Option<String> {
    let url = Url::parse(link)
        .or_else(|_| Url::parse("http://localhost/").and_then(|root| root.join(link)))
        .ok()?;
    url.query_pairs()
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|query| !query.is_empty())
}

fn root_of(base: &str) -> Result<Url, LinkError> {
    let mut url = Url::parse(base).map_err(|e| LinkError::InvalidBase { base: base.to_string(), reason: e.to_string() })?;
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
#[path = "link_test.rs"]
mod tests;
