//! Catalog state machine (pure).
//!
//! All state transitions are synchronous and testable without any I/O.

pub mod catalog;
pub mod search;

// Re-export for convenience
pub use catalog::CatalogState;
pub use search::SearchQuery;
