//! ThinkOfATitle — research paper title suggestions from Gemini.
//!
//! A topic goes in, five `{title, briefOverview}` suggestions come out. The
//! `session` controller owns the visible state, a `SuggestionSource` reaches
//! the model either directly or through the key-holding proxy in `routes`.

pub mod error;
pub mod frontend;
pub mod gemini;
pub mod link;
pub mod parse;
pub mod routes;
pub mod session;
pub mod state;
pub mod suggestion;
