//! Product catalog: reference data and visibility filtering.
//!
//! The catalog is fixture data fetched through the mock transport. Which
//! categories a session sees depends on its store context: the printing
//! counter sells print materials plus general goods, the retail counter
//! sells uniforms plus general goods, and a general session sees everything.

use arjuna_core::{CategoryId, ItemId, Rupiah, StoreKind};
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub stock: u32,
    /// Price per unit; for customizable items, per unit area.
    pub price: Rupiah,
    /// Display unit, e.g. `pcs`, `m`, `m²`.
    pub unit: String,
    /// Whether the price is multiplied by an area chosen at add-to-cart time.
    #[serde(default)]
    pub is_customizable: bool,
}

/// The loaded catalog of a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from fetched reference data.
    #[must_use]
    pub const fn new(items: Vec<Item>, categories: Vec<Category>) -> Self {
        Self { items, categories }
    }

    /// All items, unfiltered.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All categories, unfiltered.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Categories visible to a store context.
    #[must_use]
    pub fn visible_categories(&self, store: StoreKind) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|category| category_visible(category.id, store))
            .collect()
    }

    /// Items visible to a store context, optionally narrowed to one category
    /// and a case-insensitive name search.
    #[must_use]
    pub fn browse(
        &self,
        store: StoreKind,
        category: Option<CategoryId>,
        search: &str,
    ) -> Vec<&Item> {
        let needle = search.to_lowercase();
        self.items
            .iter()
            .filter(|item| category_visible(item.category_id, store))
            .filter(|item| category.is_none_or(|wanted| item.category_id == wanted))
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Category visibility per store context.
///
/// Category 1 is print material, category 2 is uniforms/retail, category 3
/// is shared general goods.
const fn category_visible(id: CategoryId, store: StoreKind) -> bool {
    let id = id.as_i64();
    match store {
        StoreKind::Printing => id == 1 || id == 3,
        StoreKind::Retail => id == 2 || id == 3,
        StoreKind::General => true,
    }
}
