//! Items, creatures, containers, and locations for the Dungeon action core.
//!
//! This crate models the physical world the hero acts on. It knows nothing
//! about commands or time advancement; it only guarantees that items live
//! in exactly one container and that containers respect their limits.
//!
//! # Modules
//!
//! - [`creature`] -- Creatures and bounded health pools.
//! - [`error`] -- Error types for container and map operations.
//! - [`inventory`] -- Bounded item containers and the dry-run
//!   [`SimulationResult`] check.
//! - [`item`] -- Items, integrity, and optional capability components
//!   (food, book, clock, weapon, decomposition).
//! - [`location`] -- A grid square holding creatures and ground items.
//! - [`world_map`] -- Locations keyed by point, generated on first visit
//!   through the [`LocationGenerator`] seam.
//! - [`starting_world`] -- Preset terrain, creatures, and items, plus the
//!   seeded [`PresetGenerator`].

pub mod creature;
pub mod error;
pub mod inventory;
pub mod item;
pub mod location;
pub mod starting_world;
pub mod world_map;

// Re-export primary types at crate root.
pub use creature::{Creature, Health};
pub use error::WorldError;
pub use inventory::{Inventory, SimulationResult};
pub use item::{
    BookComponent, ClockComponent, DecompositionComponent, FoodComponent, Integrity,
    IntegrityState, Item, WeaponComponent,
};
pub use location::Location;
pub use starting_world::{CreaturePreset, ItemPreset, PresetGenerator, Terrain};
pub use world_map::{LocationGenerator, WorldMap};
