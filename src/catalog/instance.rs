//! Item instances - a drafted item in play.
//!
//! `ItemInstance` pairs a reference to an `ItemDefinition` with the
//! one piece of mutable state an item carries: its current power.
//! An instance is owned by exactly one container at a time (the
//! conveyor queue, or a lane slot after resolution); moving it
//! transfers ownership.

use serde::{Deserialize, Serialize};

use super::definition::{ItemDefinition, ItemId};

/// A drafted item in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInstance {
    /// Reference to the item definition.
    pub def: ItemId,

    /// Current power. Starts at the definition's base power.
    pub current_power: i64,
}

impl ItemInstance {
    /// Create a fresh instance of a definition.
    #[must_use]
    pub fn of(definition: &ItemDefinition) -> Self {
        Self {
            def: definition.id,
            current_power: definition.base_power,
        }
    }
}
