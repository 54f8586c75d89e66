//! Lane placement and global weather effects.
//!
//! ## Key Types
//!
//! - `LaneBoard`: one player's capacity-bounded slots per lane
//! - `WeatherKind` / `WeatherFlags`: the global effect flags
//! - `WeatherClearPolicy`: when flags clear (configuration)

pub mod board;
pub mod weather;

pub use board::LaneBoard;
pub use weather::{WeatherClearPolicy, WeatherFlags, WeatherKind};
