//! The conveyor system: scrolling queue, selection detector, and
//! draft source.
//!
//! ## Key Types
//!
//! - `Conveyor`: fixed-capacity scrolling queue with exact recycling
//! - `DraftSource`: weighted random item generator feeding the queue
//! - `SelectionPolicy::active_index`: the pure active-slot query

pub mod belt;
pub mod draft;
pub mod selection;

pub use belt::Conveyor;
pub use draft::DraftSource;
