//! Item catalog: definition lookup and per-category partitions.
//!
//! The `ItemCatalog` stores every item definition for a match and
//! maintains a partition of item IDs by category. Drafting a category
//! is a single uniform choice within its partition, so the Draft
//! Source never retries and never assumes a category is non-empty -
//! emptiness is caught by configuration validation instead.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{Category, ItemDefinition, ItemId};

/// Registry of item definitions with category partitions.
///
/// ## Example
///
/// ```
/// use conveyor_draft::catalog::{Category, ItemCatalog, ItemDefinition, ItemId, Lane};
///
/// let mut catalog = ItemCatalog::new();
/// catalog.register(
///     ItemDefinition::new(ItemId::new(1), "Pikeman", Category::new(0), Lane::Melee)
///         .with_power(3),
/// );
///
/// assert_eq!(catalog.get(ItemId::new(1)).unwrap().name, "Pikeman");
/// assert_eq!(catalog.category_items(Category::new(0)), &[ItemId::new(1)]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: FxHashMap<ItemId, ItemDefinition>,
    by_category: FxHashMap<Category, Vec<ItemId>>,
    next_id: u32,
}

impl ItemCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item definition.
    ///
    /// Panics if an item with the same ID already exists.
    pub fn register(&mut self, item: ItemDefinition) {
        if self.items.contains_key(&item.id) {
            panic!("Item with ID {:?} already registered", item.id);
        }
        self.by_category.entry(item.category).or_default().push(item.id);
        self.next_id = self.next_id.max(item.id.raw() + 1);
        self.items.insert(item.id, item);
    }

    /// Allocate the next unused item ID.
    pub fn alloc_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Get an item definition by ID.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }

    /// Get an item definition, panicking if not found.
    ///
    /// Use for IDs that came out of this catalog (conveyor and lane
    /// contents only ever hold registered IDs).
    #[must_use]
    pub fn get_unchecked(&self, id: ItemId) -> &ItemDefinition {
        self.items.get(&id).expect("Item not found in catalog")
    }

    /// Check if an item ID is registered.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Get the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all item definitions.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    /// The item IDs registered for a category.
    ///
    /// Empty slice for a category with no items.
    #[must_use]
    pub fn category_items(&self, category: Category) -> &[ItemId] {
        self.by_category
            .get(&category)
            .map_or(&[], Vec::as_slice)
    }
}
