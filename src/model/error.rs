//! Error types for catalog-view.
//!
//! Hierarchical taxonomy built on `thiserror`, composing via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`CatalogError`] - Expected, recoverable failures of catalog mutations
//!   - [`ValidationError`] - Caller input failed a precondition
//!   - `NotFound` - Referenced product id is absent
//! - [`AppError`] - Top-level failures of the binary
//!   - [`InputError`] - Reading or parsing the product source
//!   - [`ConfigError`] - Reading or parsing the config file
//!   - [`LoggingError`] - Installing the tracing subscriber
//!   - `std::io::Error` - Terminal I/O in the shell
//!
//! Catalog errors never leave partial state behind: a failed update or delete
//! leaves the product collection exactly as it was.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::ProductId;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a catalog mutation.
///
/// Returned by [`CatalogState::update`](crate::state::CatalogState::update)
/// and [`CatalogState::delete`](crate::state::CatalogState::delete).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Caller-supplied input failed a precondition.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No product with this id exists in the full collection.
    #[error("Product {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: ProductId,
    },
}

/// Precondition failures on caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title was empty or whitespace-only.
    #[error("title cannot be empty")]
    EmptyTitle,
}

/// Top-level application error encompassing all failure modes of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read products from the source.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to load configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Failed to initialise logging.
    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal I/O failed while running the shell.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading products from a file or reader.
#[derive(Debug, Error)]
pub enum InputError {
    /// The product file does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The input is not a JSON array of product records.
    #[error("Malformed product data: {reason}")]
    Malformed {
        /// Parser diagnostic.
        reason: String,
    },

    /// Two records share the same id.
    #[error("Duplicate product id {id}")]
    DuplicateId {
        /// The repeated id.
        id: ProductId,
    },

    /// Other I/O failure while reading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
