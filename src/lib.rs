//! # conveyor-draft
//!
//! A deterministic engine for two-player conveyor drafting matches.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Convention**: The engine hardcodes no item
//!    roster, score values, or geometry. Matches are shaped entirely by
//!    `MatchConfig` and an `ItemCatalog` supplied at startup.
//!
//! 2. **Validate Once, Never Fail**: `MatchConfig::validate` enforces
//!    every fatal precondition at load time. After a session is built,
//!    no operation returns an error; in-match edge cases (full lanes,
//!    capped collections, out-of-range picks) are silent no-ops.
//!
//! 3. **Deterministic Replay**: All randomness flows through one
//!    seeded `DraftRng`. The same catalog, configuration, seed, and
//!    input trace produce the same match.
//!
//! ## Architecture
//!
//! - **Tick-driven**: `MatchSession::tick` advances the whole match by
//!   one discrete time delta and returns a serializable `Snapshot`.
//!
//! - **Exact recycling**: the conveyor's scroll offset wraps by whole
//!   steps with the overshoot preserved, so no scroll distance is ever
//!   lost to the recycle.
//!
//! - **Table-driven scoring**: pick resolution looks the item's
//!   category up in a `ScoreTable`; adding an effect is a data change.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `catalog`: Item definitions, instances, and the registry
//! - `conveyor`: Scrolling queue, selection detector, draft source
//! - `lanes`: Per-player placement boards and weather flags
//! - `scoring`: The category-effect table and resolution engine
//! - `session`: Turn control, timing, and the tick loop
//! - `presets`: Ready-made catalogs and configurations

pub mod catalog;
pub mod conveyor;
pub mod core;
pub mod lanes;
pub mod presets;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DraftRng, DraftRngState, MatchConfig, PlayerId, PlayerPair, ScrollDirection,
    SelectionPolicy,
};

pub use crate::catalog::{Category, ItemCatalog, ItemDefinition, ItemId, ItemInstance, Lane};

pub use crate::conveyor::{Conveyor, DraftSource};

pub use crate::lanes::{LaneBoard, WeatherClearPolicy, WeatherFlags, WeatherKind};

pub use crate::scoring::{CategoryEffect, PlayerState, Resolution, ScoreTable, ScoringEngine};

pub use crate::session::{
    InputEvent, MatchResult, MatchSession, RoundClock, Snapshot, TurnController,
};
