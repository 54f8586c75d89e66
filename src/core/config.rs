//! Match configuration.
//!
//! A `MatchConfig` is supplied once at match start and never mutated
//! afterwards. It carries everything the two observed drafting styles
//! disagree on: queue and lane capacities, item geometry, scroll speed
//! and direction, the selection policy, the timers, the score table,
//! and the draft weight table.
//!
//! `MatchConfig::validate` enforces the fatal preconditions at load
//! time so that drafting and resolution never fail mid-match.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::catalog::{Category, ItemCatalog};
use crate::lanes::WeatherClearPolicy;
use crate::scoring::ScoreTable;

/// Direction the conveyor scrolls.
///
/// `Up` moves items toward lower positions (offset goes negative),
/// `Down` toward higher positions. A configuration option, not a rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    /// Items drift toward lower coordinates; recycle off the low end.
    #[default]
    Up,
    /// Items drift toward higher coordinates; recycle off the high end.
    Down,
}

/// How the single active slot is chosen each frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// First slot (in queue order) whose extent overlaps a fixed zone.
    ZoneOverlap {
        /// Start of the zone along the scroll axis.
        zone_start: f32,
        /// Length of the zone along the scroll axis.
        zone_len: f32,
    },
    /// Slot nearest to a fixed center line; ties go to the lowest
    /// queue index.
    NearestToCenter {
        /// Center line position along the scroll axis.
        center: f32,
    },
}

/// Complete match configuration.
///
/// Build with the `with_*` methods, then validate against the catalog:
///
/// ```
/// use conveyor_draft::catalog::{Category, ItemCatalog, ItemDefinition, ItemId, Lane};
/// use conveyor_draft::core::MatchConfig;
///
/// let mut catalog = ItemCatalog::new();
/// catalog.register(
///     ItemDefinition::new(ItemId::new(0), "Pikeman", Category::new(0), Lane::Melee)
///         .with_power(3),
/// );
///
/// let config = MatchConfig::new().with_draft_weight(Category::new(0), 1.0);
/// assert!(config.validate(&catalog).is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of slots on the conveyor.
    pub queue_capacity: usize,

    /// Maximum placed items per lane.
    pub lane_capacity: usize,

    /// Extent of one item along the scroll axis.
    pub item_extent: f32,

    /// Gap between adjacent items along the scroll axis.
    pub item_gap: f32,

    /// Scroll speed in position units per time unit.
    pub scroll_speed: f32,

    /// Scroll direction.
    pub scroll_direction: ScrollDirection,

    /// Fixed offset added to every slot position.
    pub lead_in: f32,

    /// Active-slot selection policy.
    pub selection: SelectionPolicy,

    /// Turn length before an automatic switch, in time units.
    pub turn_time_limit: f32,

    /// Total match duration, in time units.
    pub match_duration: f32,

    /// Per-category resolution effects.
    pub score_table: ScoreTable,

    /// Per-category draft weights. Need not sum to anything.
    pub draft_weights: Vec<(Category, f32)>,

    /// Upper bound on each per-category collected count.
    pub collection_cap: u32,

    /// When active weather flags clear.
    pub weather_clear: WeatherClearPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 10,
            lane_capacity: 8,
            item_extent: 135.0,
            item_gap: 10.0,
            scroll_speed: 100.0,
            scroll_direction: ScrollDirection::Up,
            lead_in: 0.0,
            selection: SelectionPolicy::NearestToCenter { center: 316.5 },
            turn_time_limit: 6.0,
            match_duration: 120.0,
            score_table: ScoreTable::new(),
            draft_weights: Vec::new(),
            collection_cap: 80,
            weather_clear: WeatherClearPolicy::default(),
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the default constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conveyor queue capacity.
    #[must_use]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Set the per-lane placement capacity.
    #[must_use]
    pub fn with_lane_capacity(mut self, capacity: usize) -> Self {
        self.lane_capacity = capacity;
        self
    }

    /// Set the item extent and inter-item gap.
    #[must_use]
    pub fn with_geometry(mut self, extent: f32, gap: f32) -> Self {
        self.item_extent = extent;
        self.item_gap = gap;
        self
    }

    /// Set the scroll speed.
    #[must_use]
    pub fn with_scroll_speed(mut self, speed: f32) -> Self {
        self.scroll_speed = speed;
        self
    }

    /// Set the scroll direction.
    #[must_use]
    pub fn with_scroll_direction(mut self, direction: ScrollDirection) -> Self {
        self.scroll_direction = direction;
        self
    }

    /// Set the fixed slot-position offset.
    #[must_use]
    pub fn with_lead_in(mut self, lead_in: f32) -> Self {
        self.lead_in = lead_in;
        self
    }

    /// Set the selection policy.
    #[must_use]
    pub fn with_selection(mut self, policy: SelectionPolicy) -> Self {
        self.selection = policy;
        self
    }

    /// Set the turn time limit.
    #[must_use]
    pub fn with_turn_time_limit(mut self, limit: f32) -> Self {
        self.turn_time_limit = limit;
        self
    }

    /// Set the total match duration.
    #[must_use]
    pub fn with_match_duration(mut self, duration: f32) -> Self {
        self.match_duration = duration;
        self
    }

    /// Set the score table.
    #[must_use]
    pub fn with_score_table(mut self, table: ScoreTable) -> Self {
        self.score_table = table;
        self
    }

    /// Add a draft weight for a category.
    #[must_use]
    pub fn with_draft_weight(mut self, category: Category, weight: f32) -> Self {
        self.draft_weights.push((category, weight));
        self
    }

    /// Set the per-category collection cap.
    #[must_use]
    pub fn with_collection_cap(mut self, cap: u32) -> Self {
        self.collection_cap = cap;
        self
    }

    /// Set the weather clear policy.
    #[must_use]
    pub fn with_weather_clear(mut self, policy: WeatherClearPolicy) -> Self {
        self.weather_clear = policy;
        self
    }

    /// Distance between the leading edges of adjacent slots.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.item_extent + self.item_gap
    }

    /// Check the fatal preconditions against a catalog.
    ///
    /// Every category with a positive draft weight must have at least
    /// one catalog item; capacities must be non-zero; the extent,
    /// timers, and speed must be positive (gap may be zero).
    pub fn validate(&self, catalog: &ItemCatalog) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("queue capacity"));
        }
        if self.lane_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("lane capacity"));
        }
        if self.item_extent <= 0.0 {
            return Err(ConfigError::NonPositive("item extent"));
        }
        if self.item_gap < 0.0 {
            return Err(ConfigError::NonPositive("item gap"));
        }
        if self.scroll_speed <= 0.0 {
            return Err(ConfigError::NonPositive("scroll speed"));
        }
        if self.turn_time_limit <= 0.0 {
            return Err(ConfigError::NonPositive("turn time limit"));
        }
        if self.match_duration <= 0.0 {
            return Err(ConfigError::NonPositive("match duration"));
        }

        if self.draft_weights.is_empty() {
            return Err(ConfigError::EmptyDraftTable);
        }
        if !self.draft_weights.iter().any(|&(_, w)| w > 0.0) {
            return Err(ConfigError::NoDraftableWeight);
        }
        for &(category, weight) in &self.draft_weights {
            if weight > 0.0 && catalog.category_items(category).is_empty() {
                return Err(ConfigError::UndraftableCategory(category));
            }
        }

        Ok(())
    }
}
