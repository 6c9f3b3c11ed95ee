//! Search query and product matching.
//!
//! A filter is either absent (`None`) or a validated, non-empty
//! [`SearchQuery`]. Empty and whitespace-only input means "no filter",
//! never "match nothing".

use crate::model::Product;

// ===== SearchQuery =====

/// Validated search query. Never empty, always trimmed.
/// Smart constructor enforces both invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    folded: String,
}

impl SearchQuery {
    /// Smart constructor: trims the input.
    /// Returns None if the trimmed query is empty.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let text = raw.as_ref().trim();
        if text.is_empty() {
            None
        } else {
            Some(Self {
                text: text.to_string(),
                folded: text.to_lowercase(),
            })
        }
    }

    /// The trimmed query as entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Case-insensitive substring match against title or category.
    pub fn matches(&self, product: &Product) -> bool {
        contains_folded(product.title(), &self.folded)
            || contains_folded(product.category(), &self.folded)
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
