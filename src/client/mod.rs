//! Client Module
//!
//! Transport seam over the search API plus the production HTTP client.

mod algolia;

pub use algolia::AlgoliaClient;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{SearchRequest, SearchResponse};

// == Search Backend ==
/// Transport over the search API.
///
/// One async GET per call, returning a decoded page or a fetch error.
/// The session is polymorphic over this trait; tests substitute
/// scripted implementations.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetches one page of results for the request.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError>;
}
