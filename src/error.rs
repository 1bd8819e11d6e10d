//! Error types for the search client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Fetch Error Enum ==
/// Failure of a single search request against the API.
///
/// The session does not distinguish transient from permanent failures;
/// whatever went wrong is stored as the session's last error until the
/// next successful fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level error during HTTP communication
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("search API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

// == Search Error Enum ==
/// Unified error type for the search client.
#[derive(Error, Debug)]
pub enum SearchError {
    /// No cached results exist for the term
    #[error("no cached results for term: {0}")]
    TermNotCached(String),

    /// A fetch against the search API failed
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

// == Result Type Alias ==
/// Convenience Result type for the search client.
pub type Result<T> = std::result::Result<T, SearchError>;
