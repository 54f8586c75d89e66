//! Draft source: weighted random item generation.
//!
//! A draw is two choices: a category from the weight table, then a
//! uniform item from that category's catalog partition. Both are O(1);
//! there is no retry loop, because configuration validation already
//! guaranteed every weighted category has at least one item.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, ItemCatalog, ItemInstance};
use crate::core::{DraftRng, MatchConfig};

/// Weighted item generator feeding the conveyor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftSource {
    categories: Vec<Category>,
    weights: Vec<f32>,
}

impl DraftSource {
    /// Build from a configuration's draft weight table.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        let (categories, weights) = config.draft_weights.iter().copied().unzip();
        Self { categories, weights }
    }

    /// The categories this source can draft.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Draft one item.
    ///
    /// Panics if the weight table has no positive weight or the chosen
    /// category has no catalog items; `MatchConfig::validate` rules
    /// both out before a match starts.
    pub fn draw(&self, rng: &mut DraftRng, catalog: &ItemCatalog) -> ItemInstance {
        let slot = rng
            .choose_weighted(&self.weights)
            .expect("Draft weight table has no positive weight");
        let partition = catalog.category_items(self.categories[slot]);
        assert!(
            !partition.is_empty(),
            "Drafted category has no catalog items"
        );

        let id = partition[rng.gen_range_usize(0..partition.len())];
        ItemInstance::of(catalog.get_unchecked(id))
    }
}
