//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;

/// Search client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search API
    pub base_url: String,
    /// Term searched when a session starts
    pub default_term: String,
    /// Number of hits requested per page
    pub hits_per_page: u32,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `HN_BASE_URL` - Base API URL (default: https://hn.algolia.com/api/v1)
    /// - `DEFAULT_TERM` - Initial search term (default: redux)
    /// - `HITS_PER_PAGE` - Page size (default: 100)
    /// - `REQUEST_TIMEOUT_SECS` - HTTP timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("HN_BASE_URL")
                .unwrap_or_else(|_| "https://hn.algolia.com/api/v1".to_string()),
            default_term: env::var("DEFAULT_TERM").unwrap_or_else(|_| "redux".to_string()),
            hits_per_page: env::var("HITS_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://hn.algolia.com/api/v1".to_string(),
            default_term: "redux".to_string(),
            hits_per_page: 100,
            request_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://hn.algolia.com/api/v1");
        assert_eq!(config.default_term, "redux");
        assert_eq!(config.hits_per_page, 100);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("HN_BASE_URL");
        env::remove_var("DEFAULT_TERM");
        env::remove_var("HITS_PER_PAGE");
        env::remove_var("REQUEST_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.base_url, "https://hn.algolia.com/api/v1");
        assert_eq!(config.default_term, "redux");
        assert_eq!(config.hits_per_page, 100);
        assert_eq!(config.request_timeout_secs, 10);
    }
}
