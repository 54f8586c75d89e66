//! Resolution engine: applies a picked item to match state.
//!
//! Invoked once per successful pick. The shield grant happens before
//! the score delta, so a shield item protects its picker within the
//! same resolution; the mutual penalty consults the shield holder at
//! application time. After the score delta the active player's
//! collection count goes up (silently capped), and the instance is
//! either placed into a lane (silently dropped when full) or, for
//! Global weather items, converted into a weather flag.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::effect::{CategoryEffect, ScoreTable};
use crate::catalog::{Category, ItemCatalog, ItemId, ItemInstance, Lane};
use crate::core::{MatchConfig, PlayerId, PlayerPair};
use crate::lanes::{LaneBoard, WeatherFlags, WeatherKind};

/// One player's mutable score and collection state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerState {
    /// The player this state belongs to.
    pub id: PlayerId,

    /// Effect points. May go negative.
    pub points: i64,

    /// Collected item counts per category, capped by configuration.
    pub collected: FxHashMap<Category, u32>,
}

impl PlayerState {
    /// Create a fresh state for a player.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            points: 0,
            collected: FxHashMap::default(),
        }
    }

    /// Collected count for a category.
    #[must_use]
    pub fn count(&self, category: Category) -> u32 {
        self.collected.get(&category).copied().unwrap_or(0)
    }

    /// Increment a category count unless it is already at the cap.
    ///
    /// Returns whether the count changed. The cap is silent: picks of
    /// a capped category still apply their score effect.
    pub fn collect(&mut self, category: Category, cap: u32) -> bool {
        let count = self.collected.entry(category).or_insert(0);
        if *count >= cap {
            return false;
        }
        *count += 1;
        true
    }
}

/// What one resolution did, for snapshots and event consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The resolved item.
    pub item: ItemId,

    /// The item's category.
    pub category: Category,

    /// Score change applied to each player.
    pub score_delta: PlayerPair<i64>,

    /// Lane the instance was placed into, if any.
    pub placed: Option<Lane>,

    /// Weather flag set by this resolution, if any.
    pub weather_set: Option<WeatherKind>,

    /// Whether the shield was granted to the active player.
    pub shield_granted: bool,

    /// Whether the collection count increased (false once capped).
    pub collected: bool,
}

/// Table-driven scoring and placement engine.
#[derive(Clone, Debug)]
pub struct ScoringEngine {
    table: ScoreTable,
    collection_cap: u32,
    lane_capacity: usize,
}

impl ScoringEngine {
    /// Build from a match configuration.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            table: config.score_table.clone(),
            collection_cap: config.collection_cap,
            lane_capacity: config.lane_capacity,
        }
    }

    /// The effect table in use.
    #[must_use]
    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Resolve a picked item for the active player.
    ///
    /// Takes the instance by value: resolution transfers ownership out
    /// of the queue, into a lane slot or destruction.
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        &self,
        item: ItemInstance,
        active: PlayerId,
        players: &mut PlayerPair<PlayerState>,
        shield: &mut Option<PlayerId>,
        boards: &mut PlayerPair<LaneBoard>,
        weather: &mut WeatherFlags,
        catalog: &ItemCatalog,
    ) -> Resolution {
        let def = catalog.get_unchecked(item.def);
        let effect = self.table.effect(def.category);

        // Shield grant precedes the score delta
        let shield_granted = effect == CategoryEffect::Shield;
        if shield_granted {
            *shield = Some(active);
        }

        let mut score_delta: PlayerPair<i64> = PlayerPair::with_value(0);
        match effect {
            CategoryEffect::OpponentPenalty(amount) => {
                score_delta[active.opponent()] = -amount;
            }
            CategoryEffect::ActiveBonus(amount) => {
                score_delta[active] = amount;
            }
            CategoryEffect::MutualPenalty(amount) => {
                for player in PlayerId::both() {
                    if *shield != Some(player) {
                        score_delta[player] = -amount;
                    }
                }
            }
            CategoryEffect::None | CategoryEffect::Shield | CategoryEffect::Weather => {}
        }
        for player in PlayerId::both() {
            players[player].points += score_delta[player];
        }

        let collected = players[active].collect(def.category, self.collection_cap);

        let mut placed = None;
        let mut weather_set = None;
        if def.lane.is_placement() {
            if boards[active].place(def.lane, item, self.lane_capacity) {
                placed = Some(def.lane);
            }
            // A full lane drops the instance silently
        } else if effect == CategoryEffect::Weather {
            if let Some(kind) = WeatherKind::from_tier(def.special_tier) {
                weather.set(kind);
                weather_set = Some(kind);
            }
        }

        Resolution {
            item: def.id,
            category: def.category,
            score_delta,
            placed,
            weather_set,
            shield_granted,
            collected,
        }
    }
}
