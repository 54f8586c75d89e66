//! Round clock: total match time and terminal expiry.
//!
//! Expiry is latched: once `elapsed` reaches the configured duration
//! the clock reports expired forever, and every gameplay-mutating
//! operation in the session becomes a no-op.

use serde::{Deserialize, Serialize};

/// Match clock with irreversible expiry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundClock {
    elapsed: f32,
    total: f32,
    expired: bool,
}

impl RoundClock {
    /// Create a clock for the given total duration.
    #[must_use]
    pub fn new(total: f32) -> Self {
        Self {
            elapsed: 0.0,
            total,
            expired: false,
        }
    }

    /// Time elapsed since match start.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time remaining, clamped at zero.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        (self.total - self.elapsed).max(0.0)
    }

    /// Whether the match has ended. Monotonic: never un-expires.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Add elapsed time. No-op once expired.
    pub fn tick(&mut self, dt: f32) {
        if self.expired {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.total {
            self.expired = true;
        }
    }
}
