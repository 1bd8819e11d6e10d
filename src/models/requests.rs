//! Request DTOs for the search API
//!
//! Defines the parameters of one outgoing search request.

/// Parameters for one `GET /search` call.
///
/// # Fields
/// - `term`: The search query string
/// - `page`: Zero-based page number to request
/// - `hits_per_page`: Page size requested from the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// The search query string
    pub term: String,
    /// Zero-based page number
    pub page: u64,
    /// Requested page size
    pub hits_per_page: u32,
}

impl SearchRequest {
    /// Creates a request for the given term and page.
    pub fn new(term: impl Into<String>, page: u64, hits_per_page: u32) -> Self {
        Self {
            term: term.into(),
            page,
            hits_per_page,
        }
    }

    /// Renders the request as URL query parameters.
    ///
    /// The parameter names (`query`, `page`, `hitsPerPage`) are fixed by
    /// the API.
    pub fn query_params(&self) -> [(&'static str, String); 3] {
        [
            ("query", self.term.clone()),
            ("page", self.page.to_string()),
            ("hitsPerPage", self.hits_per_page.to_string()),
        ]
    }
}
