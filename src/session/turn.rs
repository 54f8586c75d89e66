//! Turn controller: whose turn it is, and for how much longer.
//!
//! A two-state machine (P1's turn / P2's turn) starting at P1. It
//! switches on an explicit pick or when the per-turn timer runs out;
//! a timeout switch resolves nothing. Every switch resets the timer
//! and clears the transient shield. The controller has no terminal
//! state - match end is the Round Clock's call, not the turn
//! controller's.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Turn state: active player, per-turn timer, transient shield.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnController {
    active: PlayerId,
    elapsed: f32,
    shield: Option<PlayerId>,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Create with P1 active and the timer at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: PlayerId::ONE,
            elapsed: 0.0,
            shield: None,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    /// Time elapsed in the current turn.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The current shield holder, if any.
    #[must_use]
    pub fn shield(&self) -> Option<PlayerId> {
        self.shield
    }

    /// Mutable access to the shield for the resolution engine.
    pub fn shield_mut(&mut self) -> &mut Option<PlayerId> {
        &mut self.shield
    }

    /// Time remaining before a timeout switch.
    #[must_use]
    pub fn remaining(&self, limit: f32) -> f32 {
        (limit - self.elapsed).max(0.0)
    }

    /// Advance the turn timer; switch on timeout.
    ///
    /// Returns whether a timeout switch happened. A timeout is a pure
    /// switch: it resolves no item.
    pub fn advance(&mut self, dt: f32, limit: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= limit {
            self.switch();
            true
        } else {
            false
        }
    }

    /// Switch the active player, reset the timer, clear the shield.
    pub fn switch(&mut self) {
        self.active = self.active.opponent();
        self.elapsed = 0.0;
        self.shield = None;
    }
}
