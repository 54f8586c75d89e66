//! The conveyor: a scrolling, self-recycling queue of drafted items.
//!
//! The queue holds exactly `queue_capacity` instances at all times.
//! `advance` moves the scroll offset and, each time the offset passes
//! one full step (item extent plus gap), performs a corrective
//! recycle: the offset is pulled back by exactly one step (overshoot
//! preserved, so no scroll distance is ever lost), the item at the
//! trailing end is evicted, and a freshly drafted item is injected at
//! the leading end. Large `deltaTime` values trigger as many recycles
//! as they earn.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::draft::DraftSource;
use crate::catalog::{ItemCatalog, ItemInstance};
use crate::core::{DraftRng, MatchConfig, ScrollDirection};

/// The scrolling queue of item instances.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Conveyor {
    items: Vector<ItemInstance>,
    offset: f32,
    step: f32,
    extent: f32,
    speed: f32,
    direction: ScrollDirection,
    lead_in: f32,
}

impl Conveyor {
    /// Create a conveyor filled to capacity with drafted items.
    #[must_use]
    pub fn new(
        config: &MatchConfig,
        rng: &mut DraftRng,
        draft: &DraftSource,
        catalog: &ItemCatalog,
    ) -> Self {
        let items = (0..config.queue_capacity)
            .map(|_| draft.draw(rng, catalog))
            .collect();

        Self {
            items,
            offset: 0.0,
            step: config.step(),
            extent: config.item_extent,
            speed: config.scroll_speed,
            direction: config.scroll_direction,
            lead_in: config.lead_in,
        }
    }

    /// Number of items on the conveyor. Always the configured
    /// capacity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty. Never true for a built conveyor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current scroll offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Distance between the leading edges of adjacent slots.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Extent of one item along the scroll axis.
    #[must_use]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// The item in a queue slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ItemInstance> {
        self.items.get(index)
    }

    /// Iterate over queue contents in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemInstance> {
        self.items.iter()
    }

    /// Position of a queue slot along the scroll axis.
    #[must_use]
    pub fn slot_position(&self, index: usize) -> f32 {
        self.lead_in + self.offset + index as f32 * self.step
    }

    /// Advance the scroll by `speed * dt` and recycle as needed.
    ///
    /// Returns the number of items recycled this call.
    pub fn advance(
        &mut self,
        dt: f32,
        rng: &mut DraftRng,
        draft: &DraftSource,
        catalog: &ItemCatalog,
    ) -> usize {
        let mut recycled = 0;

        match self.direction {
            ScrollDirection::Up => {
                self.offset -= self.speed * dt;
                while self.offset < -self.step {
                    self.offset += self.step;
                    self.items.pop_front();
                    self.items.push_back(draft.draw(rng, catalog));
                    recycled += 1;
                }
            }
            ScrollDirection::Down => {
                self.offset += self.speed * dt;
                while self.offset > self.step {
                    self.offset -= self.step;
                    self.items.pop_back();
                    self.items.push_front(draft.draw(rng, catalog));
                    recycled += 1;
                }
            }
        }

        recycled
    }

    /// Remove a resolved item from the queue, injecting a fresh draft
    /// at the leading end so the queue stays at capacity.
    ///
    /// Returns `None` for an out-of-range index.
    pub fn take_at(
        &mut self,
        index: usize,
        rng: &mut DraftRng,
        draft: &DraftSource,
        catalog: &ItemCatalog,
    ) -> Option<ItemInstance> {
        if index >= self.items.len() {
            return None;
        }

        let taken = self.items.remove(index);
        match self.direction {
            ScrollDirection::Up => self.items.push_back(draft.draw(rng, catalog)),
            ScrollDirection::Down => self.items.push_front(draft.draw(rng, catalog)),
        }
        Some(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ItemDefinition, ItemId, Lane};

    fn fixture(config: &MatchConfig) -> (ItemCatalog, DraftSource, DraftRng) {
        let mut catalog = ItemCatalog::new();
        catalog.register(
            ItemDefinition::new(ItemId::new(0), "Pikeman", Category::new(0), Lane::Melee)
                .with_power(3),
        );
        catalog.register(
            ItemDefinition::new(ItemId::new(1), "Longbowman", Category::new(0), Lane::Ranged)
                .with_power(6),
        );
        (catalog, DraftSource::from_config(config), DraftRng::new(42))
    }

    fn config() -> MatchConfig {
        MatchConfig::new()
            .with_queue_capacity(10)
            .with_geometry(135.0, 10.0)
            .with_scroll_speed(100.0)
            .with_draft_weight(Category::new(0), 1.0)
    }

    #[test]
    fn test_starts_full() {
        let config = config();
        let (catalog, draft, mut rng) = fixture(&config);
        let conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);

        assert_eq!(conveyor.len(), 10);
        assert!(!conveyor.is_empty());
        assert_eq!(conveyor.offset(), 0.0);
    }

    #[test]
    fn test_slot_positions() {
        let config = config().with_lead_in(50.0);
        let (catalog, draft, mut rng) = fixture(&config);
        let conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);

        assert_eq!(conveyor.slot_position(0), 50.0);
        assert_eq!(conveyor.slot_position(1), 50.0 + 145.0);
        assert_eq!(conveyor.slot_position(3), 50.0 + 3.0 * 145.0);
    }

    #[test]
    fn test_advance_without_recycle() {
        let config = config();
        let (catalog, draft, mut rng) = fixture(&config);
        let mut conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);

        let recycled = conveyor.advance(0.5, &mut rng, &draft, &catalog);
        assert_eq!(recycled, 0);
        assert_eq!(conveyor.offset(), -50.0);
        assert_eq!(conveyor.len(), 10);
    }

    #[test]
    fn test_recycle_preserves_overshoot() {
        let config = config();
        let (catalog, draft, mut rng) = fixture(&config);
        let mut conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);

        // 1.5 s at 100 px/s = 150 px; step is 145, overshoot 5
        let recycled = conveyor.advance(1.5, &mut rng, &draft, &catalog);
        assert_eq!(recycled, 1);
        assert!((conveyor.offset() - (-5.0)).abs() < 1e-3);
        assert_eq!(conveyor.len(), 10);
    }

    #[test]
    fn test_large_dt_recycles_repeatedly() {
        let config = config();
        let (catalog, draft, mut rng) = fixture(&config);
        let mut conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);

        // 5 s at 100 px/s = 500 px = 3 full steps + 65
        let recycled = conveyor.advance(5.0, &mut rng, &draft, &catalog);
        assert_eq!(recycled, 3);
        assert!((conveyor.offset() - (-65.0)).abs() < 1e-3);
        assert_eq!(conveyor.len(), 10);
    }

    #[test]
    fn test_recycle_shifts_queue_forward() {
        let config = config();
        let (catalog, draft, mut rng) = fixture(&config);
        let mut conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);

        let survivors: Vec<_> = conveyor.iter().skip(1).cloned().collect();
        conveyor.advance(1.5, &mut rng, &draft, &catalog);

        // Old slots 1..N moved to 0..N-1; slot N-1 is freshly drafted
        let shifted: Vec<_> = conveyor.iter().take(9).cloned().collect();
        assert_eq!(survivors, shifted);
    }

    #[test]
    fn test_downward_scroll() {
        let config = config().with_scroll_direction(ScrollDirection::Down);
        let (catalog, draft, mut rng) = fixture(&config);
        let mut conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);

        let survivors: Vec<_> = conveyor.iter().take(9).cloned().collect();
        let recycled = conveyor.advance(1.5, &mut rng, &draft, &catalog);

        assert_eq!(recycled, 1);
        assert!((conveyor.offset() - 5.0).abs() < 1e-3);
        assert_eq!(conveyor.len(), 10);

        // Old slots 0..N-1 moved to 1..N; slot 0 is freshly drafted
        let shifted: Vec<_> = conveyor.iter().skip(1).cloned().collect();
        assert_eq!(survivors, shifted);
    }

    #[test]
    fn test_take_at_keeps_capacity() {
        let config = config();
        let (catalog, draft, mut rng) = fixture(&config);
        let mut conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);

        let before: Vec<_> = conveyor.iter().cloned().collect();
        let taken = conveyor.take_at(4, &mut rng, &draft, &catalog).unwrap();

        assert_eq!(taken, before[4]);
        assert_eq!(conveyor.len(), 10);
        // Remaining order preserved around the removed slot
        assert_eq!(conveyor.get(3), Some(&before[3]));
        assert_eq!(conveyor.get(4), Some(&before[5]));
    }

    #[test]
    fn test_take_at_out_of_range() {
        let config = config();
        let (catalog, draft, mut rng) = fixture(&config);
        let mut conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);

        assert!(conveyor.take_at(10, &mut rng, &draft, &catalog).is_none());
        assert_eq!(conveyor.len(), 10);
    }
}
