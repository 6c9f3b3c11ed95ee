//! Product input sources.
//!
//! Parses a JSON array of product records at the boundary, so the catalog
//! only ever sees validated [`Product`] values with unique ids.
//! - File loading via [`FileSource`]
//! - Any reader via [`read_products`]

use crate::model::error::InputError;
use crate::model::Product;
use std::collections::HashSet;
use std::io::Read;

pub mod file;

pub use file::FileSource;

/// Read and validate a JSON product array from any reader.
///
/// # Errors
///
/// - `InputError::Malformed` if the input is not a JSON array of products.
/// - `InputError::DuplicateId` if two records share an id.
/// - `InputError::Io` for read failures.
pub fn read_products<R: Read>(reader: R) -> Result<Vec<Product>, InputError> {
    let products: Vec<Product> =
        serde_json::from_reader(reader).map_err(|e| match e.classify() {
            serde_json::error::Category::Io => InputError::Io(e.into()),
            _ => InputError::Malformed {
                reason: e.to_string(),
            },
        })?;
    ensure_unique_ids(&products)?;
    Ok(products)
}

fn ensure_unique_ids(products: &[Product]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id()) {
            return Err(InputError::DuplicateId { id: product.id() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn reads_product_array() {
        let data = br#"[
            {"id": 1, "title": "A", "price": 1.5, "category": "x", "description": "", "image": ""},
            {"id": 2, "title": "B", "price": 2.5, "category": "y", "description": "", "image": ""}
        ]"#;

        let products = read_products(&data[..]).expect("valid input");

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id(), ProductId::new(1));
        assert_eq!(products[1].title(), "B");
    }

    #[test]
    fn empty_array_is_valid() {
        let products = read_products(&b"[]"[..]).expect("valid input");

        assert!(products.is_empty());
    }

    #[test]
    fn rejects_non_array_json() {
        let result = read_products(&br#"{"id": 1}"#[..]);

        assert!(
            matches!(result, Err(InputError::Malformed { .. })),
            "Expected Malformed, got: {:?}",
            result
        );
    }

    #[test]
    fn rejects_truncated_json() {
        let result = read_products(&br#"[{"id": 1, "title": "A""#[..]);

        assert!(matches!(result, Err(InputError::Malformed { .. })));
    }

    #[test]
    fn rejects_string_ids() {
        let data = br#"[{"id": "1", "title": "A", "price": 1.0, "category": "x"}]"#;

        assert!(matches!(
            read_products(&data[..]),
            Err(InputError::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let data = br#"[
            {"id": 7, "title": "A", "price": 1.0, "category": "x"},
            {"id": 7, "title": "B", "price": 2.0, "category": "y"}
        ]"#;

        let result = read_products(&data[..]);

        match result {
            Err(InputError::DuplicateId { id }) => assert_eq!(id, ProductId::new(7)),
            other => panic!("Expected DuplicateId, got: {:?}", other),
        }
    }
}
