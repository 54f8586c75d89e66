//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks every other component consumes. The
//! two observed drafting styles differ only in configuration, never in
//! core types.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{MatchConfig, ScrollDirection, SelectionPolicy};
pub use error::ConfigError;
pub use player::{PlayerId, PlayerPair};
pub use rng::{DraftRng, DraftRngState};
