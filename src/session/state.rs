//! Session State Module
//!
//! The session's mutable state, the actions that transition it, and the
//! reducer applying them.

use crate::cache::SearchCache;
use crate::error::{FetchError, Result};
use crate::models::{Hit, SearchResponse};

// == Session State ==
/// Mutable state of one search session.
///
/// `active_term` is the term whose cache entry is displayed;
/// `query_text` is the live input value. The two diverge between
/// submissions.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Per-term result cache
    pub cache: SearchCache,
    /// Term whose results are currently displayed
    pub active_term: String,
    /// Live, possibly unsubmitted input text
    pub query_text: String,
    /// Error from the most recent fetch, cleared by the next success
    pub last_error: Option<FetchError>,
}

impl SessionState {
    // == Constructor ==
    /// Creates a fresh state with the given default term active and an
    /// empty cache.
    pub fn new(default_term: impl Into<String>) -> Self {
        let term = default_term.into();
        Self {
            cache: SearchCache::new(),
            active_term: term.clone(),
            query_text: term,
            last_error: None,
        }
    }

    // == View ==
    /// Derives what a display layer needs, recomputed on every call.
    pub fn view(&self) -> SearchView {
        let entry = self.cache.get(&self.active_term);
        SearchView {
            hits: entry.map(|e| e.hits.clone()).unwrap_or_default(),
            page: entry.map(|e| e.page).unwrap_or(0),
            has_error: self.last_error.is_some(),
        }
    }
}

// == Search View ==
/// Derived display state for the active term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    /// Accumulated hits for the active term, empty if never fetched
    pub hits: Vec<Hit>,
    /// Latest merged page for the active term, 0 if never fetched
    pub page: u64,
    /// Whether the most recent fetch failed
    pub has_error: bool,
}

// == Actions ==
/// One state transition of the session.
#[derive(Debug)]
pub enum Action {
    /// The input text changed without being submitted
    QueryChanged(String),
    /// The current input text was submitted as the active term
    Submitted,
    /// The next page for the active term was requested
    LoadMoreRequested,
    /// One hit id was dismissed from the active term's results
    Dismissed(String),
    /// A fetch resolved with a page for the term it was issued for
    FetchSucceeded {
        term: String,
        response: SearchResponse,
    },
    /// A fetch failed
    FetchFailed { error: FetchError },
}

// == Effects ==
/// A side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page for a term
    Fetch { term: String, page: u64 },
}

// == Reducer ==
/// Applies one action to the state and returns the effect to run.
///
/// Every transition succeeds except `Dismissed` against a term that was
/// never fetched.
///
/// - `Submitted` activates the query text and requests page 0 only on a
///   cache miss; cached terms are reused without a fetch.
/// - `LoadMoreRequested` requests the page after the active entry's
///   latest, or page 1 if the term has no entry yet.
/// - `FetchSucceeded` merges under the term the fetch was issued for,
///   which is not necessarily the active term by the time it resolves,
///   and clears the last error.
/// - `FetchFailed` records the error and leaves the cache untouched.
pub fn reduce(state: &mut SessionState, action: Action) -> Result<Option<Effect>> {
    match action {
        Action::QueryChanged(text) => {
            state.query_text = text;
            Ok(None)
        }
        Action::Submitted => {
            state.active_term = state.query_text.clone();
            if state.cache.get(&state.active_term).is_none() {
                Ok(Some(Effect::Fetch {
                    term: state.active_term.clone(),
                    page: 0,
                }))
            } else {
                Ok(None)
            }
        }
        Action::LoadMoreRequested => {
            let current_page = state
                .cache
                .get(&state.active_term)
                .map(|entry| entry.page)
                .unwrap_or(0);
            Ok(Some(Effect::Fetch {
                term: state.active_term.clone(),
                page: current_page + 1,
            }))
        }
        Action::Dismissed(id) => {
            state.cache.remove_hit(&state.active_term, &id)?;
            Ok(None)
        }
        Action::FetchSucceeded { term, response } => {
            state.cache.merge(&term, response);
            state.last_error = None;
            Ok(None)
        }
        Action::FetchFailed { error } => {
            state.last_error = Some(error);
            Ok(None)
        }
    }
}
