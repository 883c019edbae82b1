//! A single square of the world grid.
//!
//! A [`Location`] owns the creatures standing on it and an unbounded ground
//! [`Inventory`]. It does not own the hero: the hero's position is a
//! [`Point`](dungeon_types::Point) kept by the game state, so every list of
//! creatures here excludes the hero.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use dungeon_types::{CreatureId, Direction, ItemId, LocationId, Name, PartOfDay, Percentage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::creature::Creature;
use crate::error::WorldError;
use crate::inventory::Inventory;
use crate::item::Item;

/// A square of the world with its inhabitants and the items on its ground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Display name ("Forest").
    pub name: Name,
    /// One-sentence description shown when looking around.
    pub description: String,
    /// Fraction of daylight that reaches the ground here.
    pub light_permittivity: Percentage,
    /// Directions that cannot be walked out of this location.
    pub blocked: BTreeSet<Direction>,
    /// Creatures standing here, in arrival order.
    pub creatures: Vec<Creature>,
    /// Items lying on the ground.
    pub inventory: Inventory,
}

impl Location {
    /// An empty location.
    pub fn new(name: Name, description: impl Into<String>, light_permittivity: Percentage) -> Self {
        Self {
            id: LocationId::new(),
            name,
            description: description.into(),
            light_permittivity,
            blocked: BTreeSet::new(),
            creatures: Vec::new(),
            inventory: Inventory::unbounded(),
        }
    }

    /// Light on the ground at the given part of the day.
    pub fn luminosity(&self, part_of_day: PartOfDay) -> Percentage {
        self.light_permittivity.multiply(part_of_day.luminosity())
    }

    /// Whether walking `direction` out of here is impossible.
    pub fn is_blocked(&self, direction: Direction) -> bool {
        self.blocked.contains(&direction)
    }

    /// Put a creature here.
    pub fn add_creature(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Take a creature out of this location.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::CreatureNotFound`] if it is not here.
    pub fn remove_creature(&mut self, id: CreatureId) -> Result<Creature, WorldError> {
        let index = self
            .creatures
            .iter()
            .position(|creature| creature.id == id)
            .ok_or(WorldError::CreatureNotFound(id))?;
        Ok(self.creatures.remove(index))
    }

    /// Borrow a creature by id.
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.iter().find(|creature| creature.id == id)
    }

    /// Whether the item lies on the ground here.
    pub fn has_item(&self, id: ItemId) -> bool {
        self.inventory.contains(id)
    }

    /// Drop an item on the ground.
    ///
    /// # Errors
    ///
    /// Propagates [`Inventory::add`] failures.
    pub fn add_item(&mut self, item: Item) -> Result<(), WorldError> {
        self.inventory.add(item)
    }

    /// Take an item off the ground.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ItemNotFound`] if it is not here.
    pub fn remove_item(&mut self, id: ItemId) -> Result<Item, WorldError> {
        self.inventory.remove(id)
    }

    /// Remove every item that rotted away by `now` or broke beyond repair.
    pub fn remove_expired_items(&mut self, now: NaiveDateTime) -> Vec<Item> {
        let removed = self
            .inventory
            .remove_where(|item| item.is_decomposed(now) || item.should_be_removed());
        for item in &removed {
            debug!(item = %item.id, name = %item.name, location = %self.name, "item left play");
        }
        removed
    }
}
