//! Mock catalog gateways for CI-safe tests and demos.
//!
//! `InMemoryCatalog` is a static, deterministic catalog that answers both
//! gateway operations from memory. `DynamicMockGateway` defers every call to a
//! controller so tests can script failures, hangs and count calls.
use std::collections::HashMap;

use async_trait::async_trait;
use discount_core::{CatalogGateway, CategoryGroup, DiscountError, Item};
use serde::Deserialize;

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockGateway, MockBehavior};

/// A catalog category and its ancestry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ancestors from the root down, usually ending with this category.
    pub path_from_root: Vec<String>,
}

impl Category {
    /// Build a category from its id, name and ancestry.
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, path_from_root: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            path_from_root: path_from_root.into_iter().map(Into::into).collect(),
        }
    }

    /// Top-most ancestor; a category without a path is its own root.
    #[must_use]
    pub fn root_id(&self) -> &str {
        self.path_from_root.first().unwrap_or(&self.id)
    }
}

#[derive(Deserialize)]
struct CategoryRef {
    id: String,
}

#[derive(Deserialize)]
struct CategoryRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    path_from_root: Vec<CategoryRef>,
}

/// Catalog held in memory with a precomputed item to root-category index.
pub struct InMemoryCatalog {
    items: HashMap<String, Item>,
    item_to_root: HashMap<String, String>,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::fixtures()
    }
}

impl InMemoryCatalog {
    /// Index the given items and categories.
    ///
    /// Items referencing an unknown category stay fetchable but are never
    /// grouped.
    pub fn new(items: impl IntoIterator<Item = Item>, categories: &[Category]) -> Self {
        let by_id: HashMap<&str, &Category> =
            categories.iter().map(|c| (c.id.as_str(), c)).collect();
        let items: HashMap<String, Item> =
            items.into_iter().map(|it| (it.id.clone(), it)).collect();
        let item_to_root = items
            .values()
            .filter_map(|it| {
                by_id
                    .get(it.category_id.as_str())
                    .map(|cat| (it.id.clone(), cat.root_id().to_string()))
            })
            .collect();
        Self {
            items,
            item_to_root,
        }
    }

    /// The deterministic fixture catalog used by tests and demos.
    #[must_use]
    pub fn fixtures() -> Self {
        Self::new(fixtures::items::all(), &fixtures::categories::all())
    }

    /// Load a catalog from the Items service's JSON documents: objects keyed by
    /// item id and by category id respectively.
    ///
    /// # Errors
    /// Returns `InvalidArg` when either document does not decode.
    pub fn from_json(items_json: &str, categories_json: &str) -> Result<Self, DiscountError> {
        let raw_items: HashMap<String, Item> = serde_json::from_str(items_json)
            .map_err(|e| DiscountError::InvalidArg(format!("items document: {e}")))?;
        let raw_categories: HashMap<String, CategoryRecord> =
            serde_json::from_str(categories_json)
                .map_err(|e| DiscountError::InvalidArg(format!("categories document: {e}")))?;

        // The map key is authoritative for the id.
        let items = raw_items.into_iter().map(|(id, mut it)| {
            it.id = id;
            it
        });
        let categories: Vec<Category> = raw_categories
            .into_iter()
            .map(|(id, rec)| {
                Category::new(id, rec.name, rec.path_from_root.into_iter().map(|r| r.id))
            })
            .collect();
        Ok(Self::new(items, &categories))
    }

    /// Root category of an item, if the item and its category are known.
    #[must_use]
    pub fn root_category_of(&self, item_id: &str) -> Option<&str> {
        self.item_to_root.get(item_id).map(String::as_str)
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn lookup(&self, ids: &[String]) -> Vec<Item> {
        ids.iter().filter_map(|id| self.items.get(id).cloned()).collect()
    }

    fn group(&self, ids: &[String]) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        let mut slot: HashMap<&str, usize> = HashMap::new();
        for id in ids {
            let Some(root) = self.item_to_root.get(id) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(item_id = %id, "item not grouped: unknown item or category");
                continue;
            };
            let idx = *slot.entry(root.as_str()).or_insert_with(|| {
                groups.push(CategoryGroup::new(root.clone(), Vec::new()));
                groups.len() - 1
            });
            let members = &mut groups[idx].item_ids;
            if !members.contains(id) {
                members.push(id.clone());
            }
        }
        groups
    }
}

#[async_trait]
impl CatalogGateway for InMemoryCatalog {
    fn name(&self) -> &'static str {
        "discount-mock"
    }

    async fn fetch_items_by_ids(&self, ids: &[String]) -> Result<Vec<Item>, DiscountError> {
        Ok(self.lookup(ids))
    }

    async fn group_by_root_category(
        &self,
        ids: &[String],
    ) -> Result<Vec<CategoryGroup>, DiscountError> {
        Ok(self.group(ids))
    }
}
