//! Request and response models for the search API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! building search requests and decoding API response bodies.

pub mod hit;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use hit::Hit;
pub use requests::SearchRequest;
pub use responses::SearchResponse;
