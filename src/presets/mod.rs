//! Ready-made catalogs and configurations.
//!
//! Two presets cover the two observed drafting styles:
//!
//! - [`color_rush`]: a fast 48-slot belt of colored tokens where every
//!   pick is a pure score effect (penalties, bonuses, a shield).
//! - [`battlefield`]: a slow 10-slot belt of units, heroes, and
//!   weather items resolved onto per-player lane boards.
//!
//! Both return a `(catalog, config)` pair that passes
//! `MatchConfig::validate`, ready for `MatchSession::new`.

use crate::catalog::{Category, ItemCatalog, ItemDefinition, Lane};
use crate::core::{MatchConfig, SelectionPolicy};
use crate::scoring::{CategoryEffect, ScoreTable};

/// Color-token categories used by [`color_rush`].
pub mod colors {
    use crate::catalog::Category;

    /// Penalizes the opponent.
    pub const RED: Category = Category::new(0);
    /// Large bonus for the picker.
    pub const BLUE: Category = Category::new(1);
    /// Medium bonus for the picker.
    pub const YELLOW: Category = Category::new(2);
    /// Small bonus for the picker.
    pub const ORANGE: Category = Category::new(3);
    /// Penalizes both players; the shield holder is exempt.
    pub const GREEN: Category = Category::new(4);
    /// Grants the transient shield.
    pub const BLACK: Category = Category::new(5);
}

/// Battlefield categories used by [`battlefield`].
pub mod forces {
    use crate::catalog::Category;

    /// Ordinary units placed into lanes.
    pub const NORMAL: Category = Category::new(0);
    /// Global items that toggle a weather flag.
    pub const WEATHER: Category = Category::new(1);
    /// Global items with no table effect.
    pub const SPECIAL: Category = Category::new(2);
    /// High-power weather-immune units.
    pub const HERO: Category = Category::new(3);
}

/// The color-token preset: a dense, fast belt of pure score effects.
///
/// Six token colors, one item each, drafted uniformly. Tokens live in
/// the Global lane, so resolution never touches the lane boards; the
/// terminal total is points alone.
#[must_use]
pub fn color_rush() -> (ItemCatalog, MatchConfig) {
    use colors::*;

    let mut catalog = ItemCatalog::new();
    for (name, category) in [
        ("Red Token", RED),
        ("Blue Token", BLUE),
        ("Yellow Token", YELLOW),
        ("Orange Token", ORANGE),
        ("Green Token", GREEN),
        ("Black Token", BLACK),
    ] {
        let id = catalog.alloc_id();
        catalog.register(ItemDefinition::new(id, name, category, Lane::Global));
    }

    let table = ScoreTable::new()
        .with_effect(RED, CategoryEffect::OpponentPenalty(5))
        .with_effect(BLUE, CategoryEffect::ActiveBonus(15))
        .with_effect(YELLOW, CategoryEffect::ActiveBonus(10))
        .with_effect(ORANGE, CategoryEffect::ActiveBonus(5))
        .with_effect(GREEN, CategoryEffect::MutualPenalty(3))
        .with_effect(BLACK, CategoryEffect::Shield);

    let config = MatchConfig::new()
        .with_queue_capacity(48)
        .with_geometry(135.0, 0.0)
        .with_scroll_speed(400.0)
        .with_lead_in(50.0)
        .with_selection(SelectionPolicy::NearestToCenter { center: 316.5 })
        .with_turn_time_limit(6.0)
        .with_match_duration(120.0)
        .with_collection_cap(80)
        .with_score_table(table)
        .with_draft_weight(RED, 1.0)
        .with_draft_weight(BLUE, 1.0)
        .with_draft_weight(YELLOW, 1.0)
        .with_draft_weight(ORANGE, 1.0)
        .with_draft_weight(GREEN, 1.0)
        .with_draft_weight(BLACK, 1.0);

    (catalog, config)
}

/// The battlefield preset: lane placement, heroes, and weather.
///
/// Twelve items across four categories. Ordinary units and heroes are
/// placed into their lane on resolution; heroes ignore weather.
/// Weather items toggle the flag for their tier's lane. Draft weights
/// favor ordinary units 70/10/10/10.
#[must_use]
pub fn battlefield() -> (ItemCatalog, MatchConfig) {
    use forces::*;

    let mut catalog = ItemCatalog::new();
    let units: [(&str, Category, Lane, i64); 6] = [
        ("Pikeman", NORMAL, Lane::Melee, 3),
        ("Swordsman", NORMAL, Lane::Melee, 4),
        ("Crossbowman", NORMAL, Lane::Ranged, 5),
        ("Longbowman", NORMAL, Lane::Ranged, 6),
        ("Ballista", NORMAL, Lane::Siege, 6),
        ("Catapult", NORMAL, Lane::Siege, 8),
    ];
    for (name, category, lane, power) in units {
        let id = catalog.alloc_id();
        catalog.register(ItemDefinition::new(id, name, category, lane).with_power(power));
    }

    for (name, tier) in [("Frost Wraith", 1), ("Fog Shade", 2), ("Storm Caller", 3)] {
        let id = catalog.alloc_id();
        catalog.register(
            ItemDefinition::new(id, name, WEATHER, Lane::Global).with_tier(tier),
        );
    }

    let horn = catalog.alloc_id();
    catalog.register(ItemDefinition::new(horn, "War Horn", SPECIAL, Lane::Global));

    let heroes: [(&str, Lane); 2] = [("Champion", Lane::Melee), ("Dragonslayer", Lane::Ranged)];
    for (name, lane) in heroes {
        let id = catalog.alloc_id();
        catalog.register(
            ItemDefinition::new(id, name, HERO, lane)
                .with_power(15)
                .weather_immune(),
        );
    }

    let table = ScoreTable::new().with_effect(WEATHER, CategoryEffect::Weather);

    let config = MatchConfig::new()
        .with_queue_capacity(10)
        .with_lane_capacity(8)
        .with_geometry(135.0, 10.0)
        .with_scroll_speed(100.0)
        .with_selection(SelectionPolicy::ZoneOverlap {
            zone_start: 316.5,
            zone_len: 135.0,
        })
        .with_turn_time_limit(6.0)
        .with_match_duration(120.0)
        .with_score_table(table)
        .with_draft_weight(NORMAL, 70.0)
        .with_draft_weight(WEATHER, 10.0)
        .with_draft_weight(SPECIAL, 10.0)
        .with_draft_weight(HERO, 10.0);

    (catalog, config)
}
