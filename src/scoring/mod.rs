//! Scoring and resolution.
//!
//! ## Key Types
//!
//! - `CategoryEffect` / `ScoreTable`: the category-to-effect mapping
//! - `PlayerState`: per-player points and collected counts
//! - `ScoringEngine`: applies one pick to match state
//! - `Resolution`: record of what a pick did

pub mod effect;
pub mod engine;

pub use effect::{CategoryEffect, ScoreTable};
pub use engine::{PlayerState, Resolution, ScoringEngine};
