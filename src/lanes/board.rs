//! Lane slots: per-player placement board.
//!
//! Each player owns one capacity-bounded ordered sequence of placed
//! items per placement lane. Placement into a full lane is a silent
//! no-op. Lane power is computed at query time so active weather is
//! always reflected without mutating stored items.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::weather::WeatherFlags;
use crate::catalog::{ItemCatalog, ItemInstance, Lane};

/// Inline capacity for lane storage. Matches the default lane
/// capacity, so the common configuration never heap-allocates.
const LANE_INLINE: usize = 8;

/// One player's placement board: a bounded slot sequence per lane.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LaneBoard {
    melee: SmallVec<[ItemInstance; LANE_INLINE]>,
    ranged: SmallVec<[ItemInstance; LANE_INLINE]>,
    siege: SmallVec<[ItemInstance; LANE_INLINE]>,
}

impl LaneBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The placed items in a lane, in placement order.
    ///
    /// Panics if called with `Lane::Global`; global items are never
    /// placed.
    #[must_use]
    pub fn slots(&self, lane: Lane) -> &[ItemInstance] {
        match lane {
            Lane::Melee => &self.melee,
            Lane::Ranged => &self.ranged,
            Lane::Siege => &self.siege,
            Lane::Global => panic!("Global items are never placed in a lane"),
        }
    }

    fn slots_mut(&mut self, lane: Lane) -> &mut SmallVec<[ItemInstance; LANE_INLINE]> {
        match lane {
            Lane::Melee => &mut self.melee,
            Lane::Ranged => &mut self.ranged,
            Lane::Siege => &mut self.siege,
            Lane::Global => panic!("Global items are never placed in a lane"),
        }
    }

    /// Append an item to a lane if capacity remains.
    ///
    /// Returns whether the item was placed. A full lane drops the item
    /// silently, per the engine's no-op error model.
    pub fn place(&mut self, lane: Lane, item: ItemInstance, capacity: usize) -> bool {
        let slots = self.slots_mut(lane);
        if slots.len() >= capacity {
            return false;
        }
        slots.push(item);
        true
    }

    /// Number of items placed in a lane.
    #[must_use]
    pub fn lane_len(&self, lane: Lane) -> usize {
        self.slots(lane).len()
    }

    /// Effective power of a placed item under the current weather.
    ///
    /// Active weather on a lane clamps non-immune items to power 1.
    #[must_use]
    pub fn effective_power(
        item: &ItemInstance,
        lane: Lane,
        weather: &WeatherFlags,
        catalog: &ItemCatalog,
    ) -> i64 {
        let def = catalog.get_unchecked(item.def);
        if weather.affects(lane) && !def.ignores_weather {
            item.current_power.min(1)
        } else {
            item.current_power
        }
    }

    /// Total effective power of one lane.
    #[must_use]
    pub fn lane_power(&self, lane: Lane, weather: &WeatherFlags, catalog: &ItemCatalog) -> i64 {
        self.slots(lane)
            .iter()
            .map(|item| Self::effective_power(item, lane, weather, catalog))
            .sum()
    }

    /// Total effective power across all placement lanes.
    #[must_use]
    pub fn total_power(&self, weather: &WeatherFlags, catalog: &ItemCatalog) -> i64 {
        Lane::PLACEMENT
            .iter()
            .map(|&lane| self.lane_power(lane, weather, catalog))
            .sum()
    }
}
