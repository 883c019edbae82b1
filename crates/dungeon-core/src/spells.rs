//! The spells a hero can learn from books.

use std::collections::BTreeMap;

use dungeon_types::{Name, SpellId};

/// A learnable spell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spell {
    /// Registry key.
    pub id: SpellId,
    /// Display name.
    pub name: Name,
}

/// Every spell known to the game, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellRegistry {
    /// Spells by id.
    spells: BTreeMap<SpellId, Spell>,
}

impl SpellRegistry {
    /// An empty registry.
    pub const fn empty() -> Self {
        Self {
            spells: BTreeMap::new(),
        }
    }

    /// Add or replace a spell.
    pub fn register(&mut self, id: &str, name: Name) {
        let id = SpellId::new(id);
        self.spells.insert(id.clone(), Spell { id, name });
    }

    /// Look a spell up.
    pub fn get(&self, id: &SpellId) -> Option<&Spell> {
        self.spells.get(id)
    }

    /// Number of registered spells.
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl Default for SpellRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("HEAL_SELF", Name::regular("Heal Self"));
        registry.register("UNVEIL", Name::regular("Unveil"));
        registry
    }
}
