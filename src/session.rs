//! Suggestion session — query/result lifecycle for one user.
//!
//! DESIGN
//! ======
//! `SessionController` owns a single `SessionState` inside a
//! `tokio::sync::watch` channel. `fetch` and `reset` are the only mutators;
//! the presentation layer either takes a `snapshot()` or `subscribe()`s and
//! re-renders on every transition.
//!
//! ORDERING
//! ========
//! Overlapping fetches are possible because nothing cancels an in-flight
//! request. Each fetch takes a generation number from a monotonically
//! increasing counter. Under `ResponseOrdering::LatestIssued` (default) a
//! resolution is applied only if its generation is still the latest issued;
//! earlier requests that resolve late are discarded. Under
//! `ResponseOrdering::LastResolved` every resolution applies, so whichever
//! request resolves last wins regardless of issue order.
//!
//! `reset` neither cancels nor invalidates an in-flight fetch; its eventual
//! resolution still lands on the reset state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::error::ErrorCode;
use crate::gemini::{SuggestError, SuggestionSource};
use crate::parse::parse_envelope;
use crate::suggestion::SuggestionList;

/// Shown when the request succeeded but produced nothing usable.
pub const EMPTY_RESULT_MESSAGE: &str = "No suggestions were returned";

// =============================================================================
// STATE
// =============================================================================

/// The single mutable aggregate behind a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Last submitted query. Empty means nothing submitted since the last reset.
    pub query: String,
    /// True strictly between issuing a request and applying its resolution.
    pub is_loading: bool,
    /// Failure of the most recent applied request.
    pub error: Option<String>,
    /// Result of the most recent successful request. Stale while loading.
    pub suggestions: SuggestionList,
}

impl SessionState {
    /// Whether a query has been submitted or is in flight.
    #[must_use]
    pub fn has_results_area(&self) -> bool {
        !self.query.is_empty() || self.is_loading
    }
}

/// Which resolution wins when fetches overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Only the most recently issued request may update state.
    #[default]
    LatestIssued,
    /// Every resolution updates state; the last to resolve wins.
    LastResolved,
}

/// What happened to one `fetch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The resolution was written to the session state.
    Applied,
    /// A newer fetch was issued first; this resolution was discarded.
    Superseded,
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Request and parse succeeded but yielded zero suggestions.
    #[error("No suggestions were returned")]
    EmptyResult,
    #[error(transparent)]
    Source(#[from] SuggestError),
}

impl ErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyResult => "E_EMPTY_RESULT",
            Self::Source(e) => e.error_code(),
        }
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Orchestrates source + parser and owns the session state.
///
/// Cloning is cheap and clones share the same session.
#[derive(Clone)]
pub struct SessionController {
    source: Arc<dyn SuggestionSource>,
    state: Arc<watch::Sender<SessionState>>,
    generation: Arc<AtomicU64>,
    ordering: ResponseOrdering,
}

impl SessionController {
    #[must_use]
    pub fn new(source: Arc<dyn SuggestionSource>) -> Self {
        Self::with_ordering(source, ResponseOrdering::default())
    }

    #[must_use]
    pub fn with_ordering(source: Arc<dyn SuggestionSource>, ordering: ResponseOrdering) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self { source, state: Arc::new(state), generation: Arc::new(AtomicU64::new(0)), ordering }
    }

    /// Current state, cloned.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Submit `query`: one network call, then parse, then apply.
    ///
    /// Failures never escape; they land in `SessionState::error`.
    pub async fn fetch(&self, query: &str) -> FetchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
            s.query = query.to_string();
        });
        debug!(generation, query_len = query.len(), "session: fetch issued");

        let guard = LoadingGuard { controller: self, generation, armed: true };
        let result = self.load(query).await;
        guard.finish(result)
    }

    /// Fetch the current query again. Returns `None` when nothing was submitted.
    pub async fn regenerate(&self) -> Option<FetchOutcome> {
        let query = self.state.borrow().query.clone();
        if query.is_empty() {
            return None;
        }
        Some(self.fetch(&query).await)
    }

    /// Clear query, error and suggestions. Leaves `is_loading` alone.
    pub fn reset(&self) {
        self.state.send_modify(|s| {
            s.query.clear();
            s.error = None;
            s.suggestions.clear();
        });
        debug!("session: reset");
    }

    async fn load(&self, query: &str) -> Result<SuggestionList, SessionError> {
        let envelope = self.source.request_suggestions(query).await?;
        let suggestions = parse_envelope(&envelope);
        if suggestions.is_empty() {
            return Err(SessionError::EmptyResult);
        }
        Ok(suggestions)
    }

    fn is_current(&self, generation: u64) -> bool {
        match self.ordering {
            ResponseOrdering::LatestIssued => self.generation.load(Ordering::SeqCst) == generation,
            ResponseOrdering::LastResolved => true,
        }
    }
}

// =============================================================================
// LOADING GUARD
// =============================================================================

/// Clears `is_loading` for its generation exactly once: either when the
/// resolution is applied, or on drop if the fetch future is abandoned.
struct LoadingGuard<'a> {
    controller: &'a SessionController,
    generation: u64,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn finish(mut self, result: Result<SuggestionList, SessionError>) -> FetchOutcome {
        self.armed = false;
        let generation = self.generation;

        if !self.controller.is_current(generation) {
            debug!(generation, "session: discarding superseded resolution");
            return FetchOutcome::Superseded;
        }

        match &result {
            Ok(list) => debug!(generation, count = list.len(), "session: fetch succeeded"),
            Err(e) => debug!(generation, code = e.error_code(), error = %e, "session: fetch failed"),
        }

        self.controller.state.send_modify(|s| {
            match result {
                Ok(list) => {
                    s.suggestions = list;
                    s.error = None;
                }
                Err(e) => s.error = Some(e.to_string()),
            }
            s.is_loading = false;
        });
        FetchOutcome::Applied
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed && self.controller.is_current(self.generation) {
            self.controller.state.send_modify(|s| s.is_loading = false);
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
