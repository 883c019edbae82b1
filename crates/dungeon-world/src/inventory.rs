//! Bounded item containers.
//!
//! Every [`Inventory`] is owned by exactly one holder (the hero or a
//! location) and enforces two limits: an item count and a total weight.
//! Items move between containers by value (`remove` hands the [`Item`]
//! back, `add` consumes it), so an item can never exist in two places.
//!
//! [`Inventory::simulate_add`] answers "would this fit?" without touching
//! state. Callers are expected to ask first; [`Inventory::add`] re-checks
//! and returns a [`WorldError`] rather than silently overfilling.

use dungeon_types::ItemId;
use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::item::Item;

/// Outcome of a dry-run addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulationResult {
    /// The item fits.
    Successful,
    /// One more item would exceed the item limit.
    AmountLimit,
    /// The item's weight would exceed the weight limit.
    WeightLimit,
}

/// An ordered, bounded collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Maximum number of items.
    item_limit: u32,
    /// Maximum total weight.
    weight_limit: u64,
    /// Contents in insertion order.
    items: Vec<Item>,
}

impl Inventory {
    /// An empty container with the given limits.
    pub const fn new(item_limit: u32, weight_limit: u64) -> Self {
        Self {
            item_limit,
            weight_limit,
            items: Vec::new(),
        }
    }

    /// An empty container with effectively no limits, used for the ground.
    pub const fn unbounded() -> Self {
        Self::new(u32::MAX, u64::MAX)
    }

    /// Maximum number of items.
    pub const fn item_limit(&self) -> u32 {
        self.item_limit
    }

    /// Maximum total weight.
    pub const fn weight_limit(&self) -> u64 {
        self.weight_limit
    }

    /// Number of items held.
    pub fn item_count(&self) -> u32 {
        u32::try_from(self.items.len()).unwrap_or(u32::MAX)
    }

    /// Whether the container holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total weight of the contents.
    pub fn weight(&self) -> u64 {
        self.items
            .iter()
            .fold(0_u64, |total, item| total.saturating_add(u64::from(item.weight)))
    }

    /// Check whether `item` would fit, without changing anything.
    pub fn simulate_add(&self, item: &Item) -> SimulationResult {
        if self.item_count() >= self.item_limit {
            SimulationResult::AmountLimit
        } else if self.weight().saturating_add(u64::from(item.weight)) > self.weight_limit {
            SimulationResult::WeightLimit
        } else {
            SimulationResult::Successful
        }
    }

    /// Add an item to the end of the container.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::AmountLimitExceeded`] or
    /// [`WorldError::WeightLimitExceeded`] if [`Self::simulate_add`] would
    /// not succeed, and [`WorldError::DuplicateItem`] if the item is already
    /// here.
    pub fn add(&mut self, item: Item) -> Result<(), WorldError> {
        if self.contains(item.id) {
            return Err(WorldError::DuplicateItem(item.id));
        }
        match self.simulate_add(&item) {
            SimulationResult::Successful => {
                self.items.push(item);
                Ok(())
            }
            SimulationResult::AmountLimit => Err(WorldError::AmountLimitExceeded {
                item: item.id,
                limit: self.item_limit,
            }),
            SimulationResult::WeightLimit => Err(WorldError::WeightLimitExceeded {
                item: item.id,
                weight: item.weight,
                limit: self.weight_limit,
            }),
        }
    }

    /// Take an item out of the container.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ItemNotFound`] if the item is not here.
    pub fn remove(&mut self, id: ItemId) -> Result<Item, WorldError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(WorldError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Take out every item matching `predicate`, preserving the order of
    /// both the removed and the remaining items.
    pub fn remove_where(&mut self, predicate: impl FnMut(&Item) -> bool) -> Vec<Item> {
        let (removed, kept) = core::mem::take(&mut self.items)
            .into_iter()
            .partition(predicate);
        self.items = kept;
        removed
    }

    /// Whether the item is here.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Borrow an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutably borrow an item by id.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// The contents in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
