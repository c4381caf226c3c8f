mod loader;
mod persistence;

pub use loader::load_catalog;
pub use persistence::export_catalog;

use crate::models::FoodItem;

/// Read-only view over the loaded catalog.
///
/// The pipeline never touches these items directly: callers take cloned
/// working copies via [`Catalog::working_copy`] or [`Catalog::filtered`], so
/// one invocation can never observe another's derived fields.
pub struct Catalog {
    items: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// All category labels, sorted and deduplicated.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .items
            .iter()
            .map(|item| item.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// A fresh working copy of the whole catalog.
    pub fn working_copy(&self) -> Vec<FoodItem> {
        self.items.clone()
    }

    /// A fresh working copy narrowed to one category (exact match).
    pub fn filtered(&self, category: &str) -> Vec<FoodItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
