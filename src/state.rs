//! Shared proxy state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream suggestion source that owns the secret credential.
//! `None` means the server started without `GEMINI_API_KEY`; the proxy
//! route answers every request with a configuration error in that case.

use std::sync::Arc;

use crate::gemini::SuggestionSource;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the upstream source is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Option<Arc<dyn SuggestionSource>>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Option<Arc<dyn SuggestionSource>>) -> Self {
        Self { upstream }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
