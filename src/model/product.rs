//! Product record as supplied by the source collaborator.

use crate::model::ProductId;
use serde::Deserialize;

/// One catalog item.
///
/// Only `title` is ever mutated, and only through
/// [`CatalogState::update`](crate::state::CatalogState::update).
/// The other fields are display-only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    price: f64,
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "image")]
    image_ref: String,
}

impl Product {
    /// Build a product from its parts.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
            description: description.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Current display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Unit price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Category name, searched alongside the title.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Long-form description shown in the info view.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Image location, opaque to the catalog.
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAKESTORE_ENTRY: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack",
        "price": 109.95,
        "description": "Your perfect pack for everyday use",
        "category": "men's clothing",
        "image": "https://example.test/81fPKd-2AYL.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn deserializes_source_record_and_ignores_rating() {
        let product: Product = serde_json::from_str(FAKESTORE_ENTRY).expect("valid record");

        assert_eq!(product.id(), ProductId::new(1));
        assert_eq!(product.title(), "Fjallraven - Foldsack No. 1 Backpack");
        assert_eq!(product.price(), 109.95);
        assert_eq!(product.category(), "men's clothing");
        assert_eq!(product.description(), "Your perfect pack for everyday use");
        assert_eq!(product.image_ref(), "https://example.test/81fPKd-2AYL.jpg");
    }

    #[test]
    fn description_and_image_are_optional() {
        let json = r#"{"id": 3, "title": "Mug", "price": 4.5, "category": "kitchen"}"#;
        let product: Product = serde_json::from_str(json).expect("valid record");

        assert_eq!(product.description(), "");
        assert_eq!(product.image_ref(), "");
    }

    #[test]
    fn missing_title_is_rejected() {
        let json = r#"{"id": 3, "price": 4.5, "category": "kitchen"}"#;
        let result: Result<Product, _> = serde_json::from_str(json);

        assert!(result.is_err(), "title is required");
    }

    #[test]
    fn set_title_changes_only_title() {
        let mut product = Product::new(ProductId::new(5), "Old", 1.0, "misc", "d", "i");
        product.set_title("New".to_string());

        assert_eq!(product.title(), "New");
        assert_eq!(product.category(), "misc");
        assert_eq!(product.price(), 1.0);
    }
}
