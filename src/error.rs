//! Grepable error codes shared by every error enum in the crate.

/// Stable, grepable identifier for an error variant (e.g. `E_UPSTREAM`).
///
/// Logged next to the human-readable message so operators can search logs
/// without matching on free-form text.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}
