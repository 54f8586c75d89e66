//! Match session: turn control, timing, and the tick loop.
//!
//! ## Key Types
//!
//! - `MatchSession`: owns all match state; `tick` drives one frame
//! - `InputEvent` / `Snapshot`: the session's input and output surface
//! - `TurnController`: active player, per-turn timer, shield
//! - `RoundClock`: total match time with latched expiry
//! - `MatchResult`: win/draw evaluation from terminal totals

pub mod clock;
pub mod game;
pub mod result;
pub mod turn;

pub use clock::RoundClock;
pub use game::{InputEvent, LaneView, MatchSession, PlacedView, PlayerView, SlotView, Snapshot, TurnView};
pub use result::MatchResult;
pub use turn::TurnController;
