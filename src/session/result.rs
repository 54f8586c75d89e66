//! Result evaluation: win, loss, or draw from terminal totals.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair};

/// Outcome of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// One player finished with the higher total.
    Winner(PlayerId),
    /// Equal totals.
    Draw,
}

impl MatchResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MatchResult::Winner(p) if *p == player)
    }

    /// Evaluate the outcome from both players' terminal totals.
    ///
    /// Pure and idempotent; safe to call repeatedly after expiry.
    #[must_use]
    pub fn evaluate(totals: &PlayerPair<i64>) -> MatchResult {
        let p1 = totals[PlayerId::ONE];
        let p2 = totals[PlayerId::TWO];
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => MatchResult::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => MatchResult::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }
}
