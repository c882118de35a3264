//! Core domain types
//!
//! Accounts, workers, pagination and the search filter shared by every store.

pub mod models;
pub mod search;

pub use models::{Page, Pagination, User, Worker};
pub use search::{MatchMode, SearchQuery, Searchable};
