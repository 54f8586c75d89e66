//! Global weather effects.
//!
//! Resolving a Global-lane weather item toggles one of three flags,
//! selected by the item's special tier. An active flag suppresses the
//! power of non-immune items in the lane it targets.
//!
//! When flags clear is a configuration choice (`WeatherClearPolicy`);
//! the default keeps them active for the rest of the match.

use serde::{Deserialize, Serialize};

use crate::catalog::Lane;

/// One of the three global weather effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherKind {
    /// Suppresses the melee lane.
    Frost,
    /// Suppresses the ranged lane.
    Fog,
    /// Suppresses the siege lane.
    Storm,
}

impl WeatherKind {
    /// Map an item's special tier to a weather kind.
    ///
    /// Tier 0 (and unknown tiers) carry no weather effect.
    #[must_use]
    pub const fn from_tier(tier: u8) -> Option<WeatherKind> {
        match tier {
            1 => Some(WeatherKind::Frost),
            2 => Some(WeatherKind::Fog),
            3 => Some(WeatherKind::Storm),
            _ => None,
        }
    }

    /// The placement lane this weather suppresses.
    #[must_use]
    pub const fn lane(self) -> Lane {
        match self {
            WeatherKind::Frost => Lane::Melee,
            WeatherKind::Fog => Lane::Ranged,
            WeatherKind::Storm => Lane::Siege,
        }
    }
}

/// When active weather flags are cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherClearPolicy {
    /// Flags persist for the rest of the match once set.
    #[default]
    Never,
    /// Flags clear on every turn switch (pick or timeout).
    OnTurnSwitch,
}

/// The set of active global weather flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherFlags {
    /// Frost is active (melee suppressed).
    pub frost: bool,
    /// Fog is active (ranged suppressed).
    pub fog: bool,
    /// Storm is active (siege suppressed).
    pub storm: bool,
}

impl WeatherFlags {
    /// Create with no active weather.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a weather effect.
    pub fn set(&mut self, kind: WeatherKind) {
        match kind {
            WeatherKind::Frost => self.frost = true,
            WeatherKind::Fog => self.fog = true,
            WeatherKind::Storm => self.storm = true,
        }
    }

    /// Check whether a weather effect is active.
    #[must_use]
    pub fn is_active(&self, kind: WeatherKind) -> bool {
        match kind {
            WeatherKind::Frost => self.frost,
            WeatherKind::Fog => self.fog,
            WeatherKind::Storm => self.storm,
        }
    }

    /// Whether an active flag suppresses the given lane.
    #[must_use]
    pub fn affects(&self, lane: Lane) -> bool {
        match lane {
            Lane::Melee => self.frost,
            Lane::Ranged => self.fog,
            Lane::Siege => self.storm,
            Lane::Global => false,
        }
    }

    /// Clear all flags.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tier() {
        assert_eq!(WeatherKind::from_tier(0), None);
        assert_eq!(WeatherKind::from_tier(1), Some(WeatherKind::Frost));
        assert_eq!(WeatherKind::from_tier(2), Some(WeatherKind::Fog));
        assert_eq!(WeatherKind::from_tier(3), Some(WeatherKind::Storm));
        assert_eq!(WeatherKind::from_tier(200), None);
    }

    #[test]
    fn test_kind_lane_mapping() {
        assert_eq!(WeatherKind::Frost.lane(), Lane::Melee);
        assert_eq!(WeatherKind::Fog.lane(), Lane::Ranged);
        assert_eq!(WeatherKind::Storm.lane(), Lane::Siege);
    }

    #[test]
    fn test_set_and_affects() {
        let mut flags = WeatherFlags::new();
        assert!(!flags.affects(Lane::Melee));

        flags.set(WeatherKind::Frost);
        assert!(flags.is_active(WeatherKind::Frost));
        assert!(flags.affects(Lane::Melee));
        assert!(!flags.affects(Lane::Ranged));
        assert!(!flags.affects(Lane::Global));
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut flags = WeatherFlags::new();
        flags.set(WeatherKind::Storm);
        flags.set(WeatherKind::Storm);
        assert!(flags.affects(Lane::Siege));
    }

    #[test]
    fn test_clear_all() {
        let mut flags = WeatherFlags::new();
        flags.set(WeatherKind::Frost);
        flags.set(WeatherKind::Fog);
        flags.set(WeatherKind::Storm);

        flags.clear_all();
        assert_eq!(flags, WeatherFlags::new());
    }

    #[test]
    fn test_default_policy_is_never() {
        assert_eq!(WeatherClearPolicy::default(), WeatherClearPolicy::Never);
    }
}
