//! Cache Statistics Module
//!
//! Tracks counters for cache mutations.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing cache activity.
///
/// Updated only by mutating operations; lookups leave the counters
/// untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of pages merged into the cache
    pub merges: u64,
    /// Total hits appended across all merges
    pub hits_merged: u64,
    /// Total hits removed by dismissal
    pub hits_dismissed: u64,
    /// Number of distinct terms currently cached
    pub terms: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one merged page and its hit count.
    pub fn record_merge(&mut self, hit_count: usize) {
        self.merges += 1;
        self.hits_merged += hit_count as u64;
    }

    /// Records hits removed by a dismissal.
    pub fn record_dismissals(&mut self, removed: usize) {
        self.hits_dismissed += removed as u64;
    }

    /// Sets the current number of cached terms.
    pub fn set_terms(&mut self, terms: usize) {
        self.terms = terms;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.merges, 0);
        assert_eq!(stats.hits_merged, 0);
        assert_eq!(stats.hits_dismissed, 0);
        assert_eq!(stats.terms, 0);
    }

    #[test]
    fn test_record_merge() {
        let mut stats = CacheStats::new();
        stats.record_merge(2);
        stats.record_merge(3);

        assert_eq!(stats.merges, 2);
        assert_eq!(stats.hits_merged, 5);
    }

    #[test]
    fn test_record_dismissals() {
        let mut stats = CacheStats::new();
        stats.record_dismissals(1);
        stats.record_dismissals(0);

        assert_eq!(stats.hits_dismissed, 1);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.record_merge(4);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"merges\":1"));
        assert!(json.contains("\"hits_merged\":4"));
    }
}
