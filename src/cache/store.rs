//! Cache Store Module
//!
//! Main cache engine mapping search terms to accumulated result pages.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{Result, SearchError};
use crate::models::SearchResponse;

// == Search Cache ==
/// Per-term cache of accumulated search results.
///
/// A term appears only after at least one successful fetch for it.
/// Entries are never evicted; an entry's hits grow monotonically except
/// through explicit removal.
#[derive(Debug, Default)]
pub struct SearchCache {
    /// Term-to-results storage
    entries: HashMap<String, CacheEntry>,
    /// Mutation counters
    stats: CacheStats,
}

impl SearchCache {
    // == Constructor ==
    /// Creates an empty SearchCache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Merge ==
    /// Merges one fetched page into the entry for `term`.
    ///
    /// If no entry exists, one is created from the page. If an entry
    /// exists, the page's hits are appended in order (no deduplication)
    /// and the entry's page number is set to the incoming page number.
    /// No other term's entry is touched.
    pub fn merge(&mut self, term: &str, response: SearchResponse) -> &CacheEntry {
        self.stats.record_merge(response.hits.len());

        let entry = self.entries.entry(term.to_string()).or_default();
        entry.append_page(response.hits, response.page);
        entry
    }

    // == Remove Hit ==
    /// Removes every hit with the given id from the entry for `term`.
    ///
    /// The entry's page number and the relative order of the remaining
    /// hits are unchanged.
    ///
    /// # Errors
    /// Returns `SearchError::TermNotCached` if no entry exists for `term`.
    pub fn remove_hit(&mut self, term: &str, id: &str) -> Result<&CacheEntry> {
        let entry = self
            .entries
            .get_mut(term)
            .ok_or_else(|| SearchError::TermNotCached(term.to_string()))?;

        let removed = entry.remove_hit(id);
        self.stats.record_dismissals(removed);

        Ok(&*entry)
    }

    // == Get ==
    /// Looks up the entry for `term`. Pure: no side effects, no counter
    /// updates.
    pub fn get(&self, term: &str) -> Option<&CacheEntry> {
        self.entries.get(term)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_terms(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of cached terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if no term has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
