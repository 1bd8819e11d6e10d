//! Session Driver Module
//!
//! Runs the session reducer behind shared state and executes fetch
//! effects on background tasks.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheStats};
use crate::client::SearchBackend;
use crate::config::Config;
use crate::error::Result;
use crate::models::SearchRequest;
use crate::session::state::{reduce, Action, Effect, SearchView, SessionState};

// == Search Session ==
/// Orchestrates one search session over a backend.
///
/// State transitions run to completion under the session's write lock;
/// the only suspension point is the transport call, which runs on a
/// spawned task. Completion order across overlapping fetches follows
/// task scheduling, not request order.
#[derive(Clone)]
pub struct SearchSession {
    /// Thread-safe session state
    state: Arc<RwLock<SessionState>>,
    /// Transport used for fetches
    backend: Arc<dyn SearchBackend>,
    /// Terms with a fetch currently in flight
    in_flight: Arc<RwLock<HashSet<String>>>,
    /// Set on shutdown; fetch results arriving afterwards are discarded
    cancelled: Arc<AtomicBool>,
    /// Page size requested from the backend
    hits_per_page: u32,
}

impl SearchSession {
    // == Constructor ==
    /// Creates a session with the configured default term active and an
    /// empty cache. No fetch is issued until `start` or a user action.
    pub fn new(backend: Arc<dyn SearchBackend>, config: &Config) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::new(config.default_term.clone()))),
            backend,
            in_flight: Arc::new(RwLock::new(HashSet::new())),
            cancelled: Arc::new(AtomicBool::new(false)),
            hits_per_page: config.hits_per_page,
        }
    }

    // == Start ==
    /// Issues the initial fetch for the default term.
    ///
    /// Equivalent to submitting the untouched query text; returns the
    /// handle of the spawned fetch task.
    pub async fn start(&self) -> Result<Option<JoinHandle<()>>> {
        info!("Starting search session");
        self.apply(Action::Submitted).await
    }

    // == Query Text ==
    /// Updates the live input text. Never triggers a fetch.
    pub async fn set_query(&self, text: impl Into<String>) -> Result<()> {
        self.apply(Action::QueryChanged(text.into())).await?;
        Ok(())
    }

    // == Submit ==
    /// Activates the current query text as the search term.
    ///
    /// Fetches page 0 on a cache miss; a term already cached is reused
    /// and no request is issued.
    pub async fn submit(&self) -> Result<Option<JoinHandle<()>>> {
        self.apply(Action::Submitted).await
    }

    // == Load More ==
    /// Fetches the next page for the active term.
    pub async fn load_more(&self) -> Result<Option<JoinHandle<()>>> {
        self.apply(Action::LoadMoreRequested).await
    }

    // == Dismiss ==
    /// Removes one hit from the active term's cached results.
    ///
    /// Local-only: no remote call is made, and the hit reappears if the
    /// same page is ever fetched again.
    pub async fn dismiss(&self, id: &str) -> Result<()> {
        self.apply(Action::Dismissed(id.to_string())).await?;
        Ok(())
    }

    // == Shutdown ==
    /// Tears the session down.
    ///
    /// Fetches already in flight run to completion against the
    /// transport, but their results are discarded instead of applied.
    pub fn shutdown(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        info!("Search session shut down");
    }

    // == View ==
    /// Derives the current display state for the active term.
    pub async fn view(&self) -> SearchView {
        self.state.read().await.view()
    }

    /// Returns the live input text.
    pub async fn query_text(&self) -> String {
        self.state.read().await.query_text.clone()
    }

    /// Returns a snapshot of the cached entry for a term, active or not.
    pub async fn cached_entry(&self, term: &str) -> Option<CacheEntry> {
        self.state.read().await.cache.get(term).cloned()
    }

    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.state.read().await.cache.stats()
    }

    // == Internals ==
    /// Applies one action under the write lock and executes any
    /// requested effect.
    async fn apply(&self, action: Action) -> Result<Option<JoinHandle<()>>> {
        let effect = {
            let mut state = self.state.write().await;
            reduce(&mut state, action)?
        };

        match effect {
            Some(Effect::Fetch { term, page }) => Ok(self.spawn_fetch(term, page).await),
            None => Ok(None),
        }
    }

    /// Spawns the fetch for one page, guarded to at most one in-flight
    /// request per term.
    async fn spawn_fetch(&self, term: String, page: u64) -> Option<JoinHandle<()>> {
        {
            let mut in_flight = self.in_flight.write().await;
            if !in_flight.insert(term.clone()) {
                debug!(term = %term, "Fetch already in flight for term, dropping duplicate");
                return None;
            }
        }

        let request = SearchRequest::new(term, page, self.hits_per_page);
        let state = Arc::clone(&self.state);
        let backend = Arc::clone(&self.backend);
        let in_flight = Arc::clone(&self.in_flight);
        let cancelled = Arc::clone(&self.cancelled);

        Some(tokio::spawn(async move {
            debug!(term = %request.term, page = request.page, "Fetching search page");
            let outcome = backend.search(&request).await;

            in_flight.write().await.remove(&request.term);

            // A result arriving after shutdown must not mutate the state.
            if cancelled.load(Ordering::SeqCst) {
                debug!(term = %request.term, "Session shut down, discarding fetch result");
                return;
            }

            let action = match outcome {
                Ok(response) => {
                    debug!(
                        term = %request.term,
                        page = response.page,
                        hit_count = response.hits.len(),
                        "Fetch completed"
                    );
                    Action::FetchSucceeded {
                        term: request.term.clone(),
                        response,
                    }
                }
                Err(error) => {
                    warn!(term = %request.term, error = %error, "Search fetch failed");
                    Action::FetchFailed { error }
                }
            };

            let mut state = state.write().await;
            if let Err(error) = reduce(&mut state, action) {
                // Completion transitions are total; this arm is inert
                warn!(error = %error, "Failed to apply fetch outcome");
            }
        }))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, SearchError};
    use crate::models::{Hit, SearchResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that serves a scripted queue of outcomes.
    struct ScriptedBackend {
        outcomes: Mutex<Vec<std::result::Result<SearchResponse, FetchError>>>,
    }

    impl ScriptedBackend {
        fn new(outcomes: Vec<std::result::Result<SearchResponse, FetchError>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes),
            })
        }
    }

    #[async_trait]
    impl SearchBackend for ScriptedBackend {
        async fn search(
            &self,
            _request: &SearchRequest,
        ) -> std::result::Result<SearchResponse, FetchError> {
            self.outcomes
                .lock()
                .unwrap()
                .remove(0)
        }
    }

    fn response(ids: &[&str], page: u64) -> SearchResponse {
        let hits = ids
            .iter()
            .map(|id| Hit::new(*id, "title", "https://x", "author"))
            .collect();
        SearchResponse::new(hits, page)
    }

    fn session(outcomes: Vec<std::result::Result<SearchResponse, FetchError>>) -> SearchSession {
        SearchSession::new(ScriptedBackend::new(outcomes), &Config::default())
    }

    #[tokio::test]
    async fn test_start_fetches_default_term() {
        let session = session(vec![Ok(response(&["1", "2"], 0))]);

        let handle = session.start().await.unwrap().expect("fetch spawned");
        handle.await.unwrap();

        let view = session.view().await;
        assert_eq!(view.hits.len(), 2);
        assert_eq!(view.page, 0);
        assert!(!view.has_error);
    }

    #[tokio::test]
    async fn test_submit_cached_term_issues_no_fetch() {
        let session = session(vec![Ok(response(&["1"], 0))]);

        session.start().await.unwrap().unwrap().await.unwrap();

        // Resubmitting the same term: cache hit, no second fetch
        let handle = session.submit().await.unwrap();
        assert!(handle.is_none());
        assert_eq!(session.view().await.hits.len(), 1);
    }

    #[tokio::test]
    async fn test_load_more_appends_next_page() {
        let session = session(vec![
            Ok(response(&["1", "2"], 0)),
            Ok(response(&["3"], 1)),
        ]);

        session.start().await.unwrap().unwrap().await.unwrap();
        session.load_more().await.unwrap().unwrap().await.unwrap();

        let view = session.view().await;
        let ids: Vec<String> = view.hits.iter().map(|h| h.id.clone()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(view.page, 1);
    }

    #[tokio::test]
    async fn test_dismiss_uncached_term_is_an_error() {
        let session = session(vec![]);

        let result = session.dismiss("1").await;
        assert!(matches!(result, Err(SearchError::TermNotCached(_))));
    }

    #[tokio::test]
    async fn test_failed_fetch_sets_error_flag() {
        let session = session(vec![Err(FetchError::Status {
            status: 500,
            message: "boom".to_string(),
        })]);

        session.start().await.unwrap().unwrap().await.unwrap();

        let view = session.view().await;
        assert!(view.has_error);
        assert!(view.hits.is_empty());
    }

    #[tokio::test]
    async fn test_set_query_alone_does_not_fetch() {
        let session = session(vec![]);

        session.set_query("react").await.unwrap();

        assert_eq!(session.query_text().await, "react");
        assert!(session.view().await.hits.is_empty());
    }
}
