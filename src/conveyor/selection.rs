//! Selection detector: which slot is active this frame.
//!
//! A pure query over conveyor state. Exactly one slot is active
//! whenever the queue is non-empty; "no selection" can only happen for
//! an empty queue, which a built conveyor never is.
//!
//! Two policies cover the observed variants: a fixed overlap zone
//! (first match in queue order wins) and nearest-to-center (ties go to
//! the lowest queue index).

use super::belt::Conveyor;
use crate::core::SelectionPolicy;

impl SelectionPolicy {
    /// The index of the active slot for the current scroll offset.
    ///
    /// Side-effect free; may be called every frame whether or not an
    /// input event occurred.
    #[must_use]
    pub fn active_index(&self, conveyor: &Conveyor) -> Option<usize> {
        if conveyor.is_empty() {
            return None;
        }

        match *self {
            SelectionPolicy::ZoneOverlap {
                zone_start,
                zone_len,
            } => {
                let zone_end = zone_start + zone_len;
                (0..conveyor.len()).find(|&i| {
                    let pos = conveyor.slot_position(i);
                    pos < zone_end && pos + conveyor.extent() > zone_start
                })
            }
            SelectionPolicy::NearestToCenter { center } => {
                let mut best = 0;
                let mut best_diff = f32::INFINITY;
                for i in 0..conveyor.len() {
                    let diff = (conveyor.slot_position(i) - center).abs();
                    // Strict comparison keeps the lowest index on ties
                    if diff < best_diff {
                        best_diff = diff;
                        best = i;
                    }
                }
                Some(best)
            }
        }
    }
}
