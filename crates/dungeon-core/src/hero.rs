//! The player-controlled creature.
//!
//! The [`Hero`] wraps a plain [`Creature`] and adds what only the hero has:
//! an inventory, an equipped weapon, known spells, a birth date, and a
//! position on the grid. The equipped weapon is an [`ItemId`] into the
//! hero's own inventory and is cleared whenever that item leaves it.

use chrono::NaiveDateTime;
use dungeon_types::{ItemId, Name, Percentage, Point, SpellId};
use dungeon_world::{Creature, Inventory, Item, WorldError};

use crate::config::HeroConfig;

/// The player-controlled creature and everything it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    /// Name, health, attack, and visibility.
    pub creature: Creature,
    /// What the hero carries.
    pub inventory: Inventory,
    /// Equipped weapon, always an item in `inventory`.
    weapon: Option<ItemId>,
    /// Known spells, in the order they were learned.
    spells: Vec<SpellId>,
    /// Birth date.
    pub date_of_birth: NaiveDateTime,
    /// Where the hero stands.
    pub position: Point,
}

impl Hero {
    /// A new hero at the origin with an empty inventory.
    pub fn new(config: &HeroConfig) -> Self {
        Self {
            creature: Creature::new(
                Name::regular(config.name.clone()),
                config.health,
                config.attack,
                Percentage::ONE,
            ),
            inventory: Inventory::new(config.item_limit, config.weight_limit),
            weapon: None,
            spells: Vec::new(),
            date_of_birth: config.date_of_birth,
            position: Point::default(),
        }
    }

    /// The hero's display name.
    pub const fn name(&self) -> &Name {
        &self.creature.name
    }

    // -------------------------------------------------------------------
    // Health
    // -------------------------------------------------------------------

    /// Heal by `amount`. Returns `true` if the pool is now full.
    pub fn add_health(&mut self, amount: u32) -> bool {
        self.creature.health.increment_by(amount);
        self.creature.health.is_full()
    }

    // -------------------------------------------------------------------
    // Inventory and weapon
    // -------------------------------------------------------------------

    /// The equipped weapon's id.
    pub const fn weapon(&self) -> Option<ItemId> {
        self.weapon
    }

    /// The equipped weapon.
    pub fn weapon_item(&self) -> Option<&Item> {
        self.weapon.and_then(|id| self.inventory.get(id))
    }

    /// Whether `id` is the equipped weapon.
    pub fn is_equipped(&self, id: ItemId) -> bool {
        self.weapon == Some(id)
    }

    /// Equip an item from the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ItemNotFound`] if the item is not carried.
    pub fn set_weapon(&mut self, id: ItemId) -> Result<(), WorldError> {
        if !self.inventory.contains(id) {
            return Err(WorldError::ItemNotFound(id));
        }
        self.weapon = Some(id);
        Ok(())
    }

    /// Unequip, returning what was equipped.
    pub const fn unset_weapon(&mut self) -> Option<ItemId> {
        self.weapon.take()
    }

    /// Put an item in the inventory.
    ///
    /// # Errors
    ///
    /// Propagates [`Inventory::add`] failures.
    pub fn add_item(&mut self, item: Item) -> Result<(), WorldError> {
        self.inventory.add(item)
    }

    /// Take an item out of the inventory, unequipping it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ItemNotFound`] if the item is not carried.
    pub fn remove_item(&mut self, id: ItemId) -> Result<Item, WorldError> {
        let item = self.inventory.remove(id)?;
        if self.weapon == Some(id) {
            self.weapon = None;
        }
        Ok(item)
    }

    /// Drop every item matching `predicate`, unequipping as needed.
    pub fn remove_items_where(&mut self, predicate: impl FnMut(&Item) -> bool) -> Vec<Item> {
        let removed = self.inventory.remove_where(predicate);
        if self
            .weapon
            .is_some_and(|weapon| removed.iter().any(|item| item.id == weapon))
        {
            self.weapon = None;
        }
        removed
    }

    // -------------------------------------------------------------------
    // Spells
    // -------------------------------------------------------------------

    /// Whether the hero knows `spell`.
    pub fn knows_spell(&self, spell: &SpellId) -> bool {
        self.spells.contains(spell)
    }

    /// Learn `spell`. Returns `false` if it was already known.
    pub fn learn_spell(&mut self, spell: SpellId) -> bool {
        if self.knows_spell(&spell) {
            return false;
        }
        self.spells.push(spell);
        true
    }

    /// Known spells in learning order.
    pub fn spells(&self) -> &[SpellId] {
        &self.spells
    }
}
