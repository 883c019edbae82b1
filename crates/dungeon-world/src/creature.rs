//! Creatures and their health pools.

use std::collections::BTreeSet;

use dungeon_types::{CreatureId, CreatureTag, HealthState, Name, Percentage};
use serde::{Deserialize, Serialize};

/// A bounded health pool. `current` never exceeds `maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Remaining health.
    pub current: u32,
    /// Upper bound of the pool.
    pub maximum: u32,
}

impl Health {
    /// A full pool.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Whether the pool is full.
    pub const fn is_full(self) -> bool {
        self.current >= self.maximum
    }

    /// Whether the pool is empty.
    pub const fn is_dead(self) -> bool {
        self.current == 0
    }

    /// Add `amount`, capping at the maximum.
    pub fn increment_by(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }

    /// Subtract `amount`, stopping at zero.
    pub const fn decrement_by(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Coarse description of the pool.
    pub fn state(self) -> HealthState {
        HealthState::classify(self.current, self.maximum)
    }
}

/// A living entity standing in a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Unique identifier.
    pub id: CreatureId,
    /// Display name.
    pub name: Name,
    /// How easy it is to notice, in `[0, 1]`.
    pub visibility: Percentage,
    /// Health pool.
    pub health: Health,
    /// Base attack before any weapon.
    pub attack: u32,
    /// Behavior flags.
    pub tags: BTreeSet<CreatureTag>,
}

impl Creature {
    /// A tagless creature at full health.
    pub fn new(name: Name, max_health: u32, attack: u32, visibility: Percentage) -> Self {
        Self {
            id: CreatureId::new(),
            name,
            visibility,
            health: Health::full(max_health),
            attack,
            tags: BTreeSet::new(),
        }
    }

    /// Add a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: CreatureTag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Whether the creature carries `tag`.
    pub fn has_tag(&self, tag: CreatureTag) -> bool {
        self.tags.contains(&tag)
    }
}
