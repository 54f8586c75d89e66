//! Item catalog: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `ItemId`: Identifier for item definitions
//! - `Category`: Opaque category identifier (configurations define meaning)
//! - `Lane`: Placement target (melee/ranged/siege) or the global channel
//! - `ItemDefinition`: Static item data, created once at startup
//! - `ItemInstance`: A drafted item with its current power
//! - `ItemCatalog`: Definition lookup with per-category partitions

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{Category, ItemDefinition, ItemId, Lane};
pub use instance::ItemInstance;
pub use registry::ItemCatalog;
