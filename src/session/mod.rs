//! Session Module
//!
//! Reducer-style session state plus the async driver that executes
//! fetch effects against a search backend.

pub mod driver;
pub mod state;

pub use driver::SearchSession;
pub use state::{reduce, Action, Effect, SearchView, SessionState};
