//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod product;

// Re-export for convenience
pub use error::{AppError, CatalogError, InputError, ValidationError};
pub use identifiers::{InvalidPageSize, PageSize, ProductId};
pub use product::Product;
