//! Hero actions and their dispatch.
//!
//! A front end tokenizes a command line, parses the first word with
//! [`Verb::parse`], and hands the rest to [`execute`]. Each verb maps to one
//! handler in [`handlers`], [`perception`], or [`sleep`].
//!
//! # Modules
//!
//! - [`costs`] -- Time costs and the healing formulas tied to them
//! - [`selection`] -- Target resolution against the hero's surroundings
//! - [`handlers`] -- Actions that change the world
//! - [`perception`] -- Look, inventory, status, age, time, spells
//! - [`sleep`] -- The compound sleep action

pub mod costs;
pub mod handlers;
pub mod perception;
pub mod selection;
pub mod sleep;

use tracing::debug;

use crate::combat::CombatResolver;
use crate::error::ActionError;
use crate::report::ReportSink;
use crate::state::GameState;

/// Every command the hero understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Describe the surroundings.
    Look,
    /// Walk in a direction.
    Walk,
    /// Pick an item up.
    PickUp,
    /// Drop a carried item.
    Drop,
    /// Wield a weapon.
    Equip,
    /// Put the weapon away.
    Unequip,
    /// Take a bite of food.
    Eat,
    /// Break an item on the ground.
    Destroy,
    /// Read a book.
    Read,
    /// Drink milk from a creature.
    Milk,
    /// Rest until partly healed.
    Rest,
    /// Sleep until dawn.
    Sleep,
    /// Attack a creature.
    Attack,
    /// List carried items.
    Inventory,
    /// Report health and weapon.
    Status,
    /// Report the hero's age.
    Age,
    /// Tell the time.
    Time,
    /// List known spells.
    Spells,
}

impl Verb {
    /// Parse the first word of a command, case-insensitively.
    pub fn parse(word: &str) -> Option<Self> {
        let verb = match word.to_lowercase().as_str() {
            "look" | "l" => Self::Look,
            "walk" | "go" | "move" => Self::Walk,
            "pick" | "take" | "get" => Self::PickUp,
            "drop" => Self::Drop,
            "equip" | "wield" => Self::Equip,
            "unequip" => Self::Unequip,
            "eat" => Self::Eat,
            "destroy" | "break" => Self::Destroy,
            "read" => Self::Read,
            "milk" => Self::Milk,
            "rest" => Self::Rest,
            "sleep" => Self::Sleep,
            "attack" | "kill" => Self::Attack,
            "inventory" | "items" | "i" => Self::Inventory,
            "status" => Self::Status,
            "age" => Self::Age,
            "time" => Self::Time,
            "spells" => Self::Spells,
            _ => return None,
        };
        Some(verb)
    }
}

/// Run one command to completion.
///
/// # Errors
///
/// Returns [`ActionError`] when an invariant breaks. Ordinary refusals are
/// reports, not errors.
pub fn execute(
    state: &mut GameState,
    verb: Verb,
    tokens: &[&str],
    combat: &mut dyn CombatResolver,
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    debug!(?verb, ?tokens, "executing command");
    match verb {
        Verb::Look => perception::look(state, None, sink),
        Verb::Walk => handlers::walk(state, tokens, sink),
        Verb::PickUp => handlers::pick_up(state, tokens, sink),
        Verb::Drop => handlers::drop_item(state, tokens, sink),
        Verb::Equip => handlers::equip(state, tokens, sink),
        Verb::Unequip => handlers::unequip(state, sink),
        Verb::Eat => handlers::eat(state, tokens, sink),
        Verb::Destroy => handlers::destroy(state, tokens, sink),
        Verb::Read => handlers::read(state, tokens, sink),
        Verb::Milk => handlers::milk(state, tokens, sink),
        Verb::Rest => handlers::rest(state, sink),
        Verb::Sleep => sleep::sleep(state, sink),
        Verb::Attack => handlers::attack(state, tokens, combat, sink),
        Verb::Inventory => {
            perception::inventory(state, sink);
            Ok(())
        }
        Verb::Status => {
            perception::status(state, sink);
            Ok(())
        }
        Verb::Age => {
            perception::age(state, sink);
            Ok(())
        }
        Verb::Time => perception::read_time(state, sink),
        Verb::Spells => {
            perception::spells(state, sink);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_parse_with_aliases() {
        assert_eq!(Verb::parse("TAKE"), Some(Verb::PickUp));
        assert_eq!(Verb::parse("go"), Some(Verb::Walk));
        assert_eq!(Verb::parse("i"), Some(Verb::Inventory));
        assert_eq!(Verb::parse("dance"), None);
    }
}
