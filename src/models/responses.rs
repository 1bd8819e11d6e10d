//! Response DTOs for the search API
//!
//! Defines the structure of a decoded API response body.

use serde::{Deserialize, Serialize};

use crate::models::Hit;

/// One page of search results as returned by the API.
///
/// Unknown response fields are ignored; a body without a `hits` array
/// decodes as an empty page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The hits in API order
    #[serde(default)]
    pub hits: Vec<Hit>,
    /// Zero-based page number of this batch
    #[serde(default)]
    pub page: u64,
}

impl SearchResponse {
    /// Creates a response page from its parts.
    pub fn new(hits: Vec<Hit>, page: u64) -> Self {
        Self { hits, page }
    }
}
