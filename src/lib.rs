//! HN Search - A caching client for the Hacker News search API
//!
//! Accumulates paginated search results per term and exposes a small
//! session controller for submitting searches, loading more pages, and
//! dismissing individual hits.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use client::{AlgoliaClient, SearchBackend};
pub use config::Config;
pub use session::SearchSession;
