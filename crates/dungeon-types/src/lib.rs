//! Shared type definitions for the Dungeon action core.
//!
//! This crate holds the small, dependency-light vocabulary that every other
//! crate in the workspace speaks: identifiers, tags, parts of the day, and
//! grid coordinates.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for creatures, items, and locations
//! - [`enums`] -- Tags, parts of the day, directions, health states
//! - [`structs`] -- Names, percentages, and grid points

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{CreatureTag, Direction, HealthState, ItemTag, PartOfDay};
pub use ids::{CreatureId, ItemId, LocationId, SpellId};
pub use structs::{Name, Percentage, Point};
