//! Category effect table.
//!
//! The resolution rules are data, not code: a `ScoreTable` maps each
//! `Category` to a `CategoryEffect`, and the engine applies whatever
//! the table says. Amounts and category assignments are configuration;
//! the effect shapes are the structural part.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Effect applied when an item of a category is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryEffect {
    /// No score effect (placement-only or inert items).
    None,
    /// Subtract the amount from the opposing player's score.
    OpponentPenalty(i64),
    /// Add the amount to the active player's score.
    ActiveBonus(i64),
    /// Subtract the amount from both players' scores. A player holding
    /// the transient shield is exempt for this single resolution.
    MutualPenalty(i64),
    /// No score effect; grants the transient shield to the active
    /// player until the next turn switch.
    Shield,
    /// No score effect; toggles the global weather flag selected by
    /// the item's special tier (Global-lane items only).
    Weather,
}

/// Mapping from item category to resolution effect.
///
/// Categories absent from the table resolve as `CategoryEffect::None`.
///
/// ## Example
///
/// ```
/// use conveyor_draft::catalog::Category;
/// use conveyor_draft::scoring::{CategoryEffect, ScoreTable};
///
/// let table = ScoreTable::new()
///     .with_effect(Category::new(0), CategoryEffect::OpponentPenalty(5))
///     .with_effect(Category::new(3), CategoryEffect::Shield);
///
/// assert_eq!(
///     table.effect(Category::new(0)),
///     CategoryEffect::OpponentPenalty(5)
/// );
/// assert_eq!(table.effect(Category::new(9)), CategoryEffect::None);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScoreTable {
    effects: FxHashMap<Category, CategoryEffect>,
}

impl ScoreTable {
    /// Create an empty table (every category resolves as `None`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the effect for a category (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, category: Category, effect: CategoryEffect) -> Self {
        self.effects.insert(category, effect);
        self
    }

    /// Look up the effect for a category.
    #[must_use]
    pub fn effect(&self, category: Category) -> CategoryEffect {
        self.effects
            .get(&category)
            .copied()
            .unwrap_or(CategoryEffect::None)
    }

    /// Iterate over configured (category, effect) entries.
    pub fn iter(&self) -> impl Iterator<Item = (Category, CategoryEffect)> + '_ {
        self.effects.iter().map(|(c, e)| (*c, *e))
    }
}
