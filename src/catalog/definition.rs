//! Item definitions - static draftable item data.
//!
//! `ItemDefinition` holds the immutable properties of an item variant:
//! its category, the lane it plays to, its base power, and the flags
//! that drive conditional rules (weather immunity, special tier).
//!
//! Instance-specific data (current power) is stored separately in
//! `ItemInstance`.

use serde::{Deserialize, Serialize};

/// Unique identifier for an item definition.
///
/// Identifies the item variant, not a specific instance on the
/// conveyor or in a lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Item category - configurations define their own categories.
///
/// The engine doesn't interpret categories beyond looking them up in
/// the score table and the draft weight table. One drafting style uses
/// unit tiers (normal/hero/weather/leader/special), another uses six
/// colors; both are just `Category` values to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(pub u8);

impl Category {
    /// Create a new category.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw category value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// Placement target for a resolved item.
///
/// The three placement lanes hold items; `Global` items are never
/// placed and instead trigger a global effect on resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    /// Front placement lane.
    Melee,
    /// Middle placement lane.
    Ranged,
    /// Back placement lane.
    Siege,
    /// Non-placement channel for weather and leader items.
    Global,
}

impl Lane {
    /// The three placement lanes, in board order.
    pub const PLACEMENT: [Lane; 3] = [Lane::Melee, Lane::Ranged, Lane::Siege];

    /// Whether items of this lane are placed on the board.
    #[must_use]
    pub const fn is_placement(self) -> bool {
        !matches!(self, Lane::Global)
    }
}

/// Static item definition.
///
/// Created once at startup from configuration and never mutated.
///
/// ## Example
///
/// ```
/// use conveyor_draft::catalog::{Category, ItemDefinition, ItemId, Lane};
///
/// let hero = ItemDefinition::new(ItemId::new(2), "Siege Master", Category::new(1), Lane::Siege)
///     .with_power(15)
///     .weather_immune();
///
/// assert_eq!(hero.base_power, 15);
/// assert!(hero.ignores_weather);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier for this definition.
    pub id: ItemId,

    /// Item name (for display/debugging).
    pub name: String,

    /// Category driving score effects and draft weighting.
    pub category: Category,

    /// Placement lane, or `Global` for non-placement items.
    pub lane: Lane,

    /// Base power. Non-negative; instances start at this value.
    pub base_power: i64,

    /// Hero-tier items ignore active weather effects.
    pub ignores_weather: bool,

    /// Extra-rule tier. 0 = none; weather items use 1 = frost,
    /// 2 = fog, 3 = storm.
    pub special_tier: u8,
}

impl ItemDefinition {
    /// Create a new item definition with zero power and no flags.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, category: Category, lane: Lane) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            lane,
            base_power: 0,
            ignores_weather: false,
            special_tier: 0,
        }
    }

    /// Set the base power.
    #[must_use]
    pub fn with_power(mut self, power: i64) -> Self {
        assert!(power >= 0, "Base power must be non-negative");
        self.base_power = power;
        self
    }

    /// Mark the item as weather-immune (hero tier).
    #[must_use]
    pub fn weather_immune(mut self) -> Self {
        self.ignores_weather = true;
        self
    }

    /// Set the special-rule tier.
    #[must_use]
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.special_tier = tier;
        self
    }
}
