//! Time-costing actions that change the world.
//!
//! Each handler follows the same protocol: resolve the target, check the
//! action's precondition, pay the time cost through the gate, check the
//! target is still where it was, then mutate and report. Anything that
//! fails before the payment is free. Anything that vanishes during it is
//! reported as gone, and the time stays spent.

use dungeon_types::{CreatureId, CreatureTag, Direction, ItemId, ItemTag, Percentage};
use dungeon_world::{Creature, SimulationResult};
use tracing::{info, warn};

use super::costs;
use super::perception;
use super::selection::{self, creature_name};
use crate::combat::CombatResolver;
use crate::error::ActionError;
use crate::matcher::all_share_one_name;
use crate::report::{Emphasis, ReportSink};
use crate::state::GameState;
use crate::visibility::filter_visible;

/// Reported when a location target vanished while time passed.
pub fn no_longer_there(name: &str) -> String {
    format!("{name} is no longer there.")
}

/// Reported when a carried target vanished while time passed.
pub fn no_longer_in_inventory(name: &str) -> String {
    format!("{name} is no longer in your inventory.")
}

/// Heal the hero and say so when the pool is full.
fn heal(state: &mut GameState, amount: u32, sink: &mut dyn ReportSink) {
    if state.hero.add_health(amount) {
        sink.say("You are completely healed.");
    }
}

/// Singular name of a carried item.
fn carried_name(state: &GameState, id: ItemId) -> String {
    state
        .hero
        .inventory
        .get(id)
        .map(|item| item.name.singular.clone())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Move an item from the ground into the hero's inventory.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance or a container
/// refuses an item that was checked to fit.
pub fn pick_up(
    state: &mut GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let Some(id) = selection::location_item(
        state,
        tokens,
        "You do not see any item you could pick up.",
        sink,
    )?
    else {
        return Ok(());
    };
    let Some(item) = state.hero_location()?.inventory.get(id) else {
        return Ok(());
    };
    match state.hero.inventory.simulate_add(item) {
        SimulationResult::AmountLimit => {
            sink.say("Your inventory is full.");
            return Ok(());
        }
        SimulationResult::WeightLimit => {
            sink.say("You can't carry more weight.");
            return Ok(());
        }
        SimulationResult::Successful => {}
    }
    let name = item.name.singular.clone();

    state.advance_time(costs::PICK_UP)?;

    let location = state.hero_location_mut()?;
    if !location.has_item(id) {
        sink.say(&no_longer_there(&name));
        return Ok(());
    }
    let item = location.remove_item(id)?;
    let qualified = item.qualified_name();
    state.hero.add_item(item)?;
    info!(item = %id, name = %name, "hero picked up item");
    sink.say(&format!("Added {qualified} to the inventory."));
    Ok(())
}

/// Put a carried item on the ground, unequipping it first.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance or the location
/// refuses the item.
pub fn drop_item(
    state: &mut GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let Some(id) = selection::inventory_item(state, tokens, sink) else {
        return Ok(());
    };
    if state.hero.is_equipped(id) {
        state.hero.unset_weapon();
    }
    let name = carried_name(state, id);

    state.advance_time(costs::DROP)?;

    if !state.hero.inventory.contains(id) {
        sink.say(&no_longer_in_inventory(&name));
        return Ok(());
    }
    let item = state.hero.remove_item(id)?;
    let qualified = item.qualified_name();
    state.hero_location_mut()?.add_item(item)?;
    info!(item = %id, name = %name, "hero dropped item");
    sink.say(&format!("Dropped {qualified}."));
    Ok(())
}

/// Wield a carried weapon, putting the current one away first.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance.
pub fn equip(
    state: &mut GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let Some(id) = selection::inventory_item(state, tokens, sink) else {
        return Ok(());
    };
    let Some(item) = state.hero.inventory.get(id) else {
        return Ok(());
    };
    if !item.has_tag(ItemTag::Weapon) {
        sink.say("You cannot equip that.");
        return Ok(());
    }
    let name = item.name.singular.clone();
    if state.hero.is_equipped(id) {
        sink.say(&format!("{} is already equipping {name}.", state.hero.name()));
        return Ok(());
    }
    if state.hero.weapon().is_some() {
        unequip(state, sink)?;
    }

    state.advance_time(costs::EQUIP)?;

    let Some(qualified) = state.hero.inventory.get(id).map(|item| item.qualified_name()) else {
        sink.say(&no_longer_in_inventory(&name));
        return Ok(());
    };
    state.hero.set_weapon(id)?;
    info!(item = %id, name = %name, "hero equipped weapon");
    sink.say(&format!("{} equipped {qualified}.", state.hero.name()));
    Ok(())
}

/// Put the equipped weapon away. Free when nothing is equipped.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance.
pub fn unequip(state: &mut GameState, sink: &mut dyn ReportSink) -> Result<(), ActionError> {
    let Some(weapon) = state.hero.weapon() else {
        sink.say("You are not equipping a weapon.");
        return Ok(());
    };
    let name = carried_name(state, weapon);

    state.advance_time(costs::UNEQUIP)?;

    if state.hero.is_equipped(weapon) {
        state.hero.unset_weapon();
        info!(item = %weapon, name = %name, "hero unequipped weapon");
        sink.say(&format!("{} unequipped {name}.", state.hero.name()));
    } else {
        sink.say("You are not equipping a weapon.");
    }
    Ok(())
}

/// Take one bite of a carried food item.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance.
pub fn eat(
    state: &mut GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let Some(id) = selection::inventory_item(state, tokens, sink) else {
        return Ok(());
    };
    let Some(item) = state.hero.inventory.get(id) else {
        return Ok(());
    };
    if !item.has_tag(ItemTag::Food) || item.food.is_none() {
        sink.say("You can only eat food.");
        return Ok(());
    }
    let name = item.name.singular.clone();

    state.advance_time(costs::EAT)?;

    let Some(item) = state.hero.inventory.get_mut(id) else {
        sink.say(&no_longer_in_inventory(&name));
        return Ok(());
    };
    let Some(food) = item.food else {
        return Ok(());
    };
    let healing = costs::bite_healing(
        food.nutrition,
        item.integrity.current,
        food.integrity_decrement_on_eat,
    );
    item.decrement_integrity_by_eat();
    if item.should_be_removed() {
        state.hero.remove_item(id)?;
        sink.say(&format!("You ate {name}."));
    } else {
        sink.say(&format!("You ate a bit of {name}."));
    }
    heal(state, healing, sink);
    Ok(())
}

/// Break an item lying on the ground.
///
/// The time is spent even if the item vanished meanwhile.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance.
pub fn destroy(
    state: &mut GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let Some(id) = selection::location_item(
        state,
        tokens,
        "You do not see any item you could destroy.",
        sink,
    )?
    else {
        return Ok(());
    };
    let Some(item) = state.hero_location()?.inventory.get(id) else {
        return Ok(());
    };
    if item.is_broken() {
        sink.say(&format!("{} is already crashed.", item.name));
        return Ok(());
    }
    let name = item.name.singular.clone();
    let hero_name = state.hero.name().to_string();

    let now = state.advance_time(costs::DESTROY)?;

    let location = state.hero_location_mut()?;
    let Some(item) = location.inventory.get_mut(id) else {
        sink.say(&no_longer_there(&name));
        return Ok(());
    };
    item.decrement_integrity_to_zero(now);
    let repairable = item.has_tag(ItemTag::Repairable);
    if !repairable {
        location.remove_item(id)?;
    }
    let verb = if repairable { "crashed" } else { "destroyed" };
    info!(item = %id, name = %name, verb, "hero broke item");
    sink.say(&format!("{hero_name} {verb} {name}."));
    Ok(())
}

/// Read a carried book, learning its spell if it teaches one.
///
/// # Errors
///
/// Returns [`ActionError::UnknownSpell`] if the book teaches a spell the
/// registry does not know, or a clock error.
pub fn read(
    state: &mut GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let Some(id) = selection::inventory_item(state, tokens, sink) else {
        return Ok(());
    };
    let Some(item) = state.hero.inventory.get(id) else {
        return Ok(());
    };
    let Some(book) = item.book.clone() else {
        sink.say("You can only read books.");
        return Ok(());
    };
    let name = item.name.singular.clone();

    state.advance_time(book.time_to_read.max(1))?;

    if !state.hero.inventory.contains(id) {
        sink.say(&no_longer_in_inventory(&name));
        return Ok(());
    }
    sink.say(&book.text);
    let Some(spell_id) = book.spell else {
        return Ok(());
    };
    let Some(spell) = state.spells.get(&spell_id) else {
        warn!(spell = %spell_id, book = %name, "book teaches an unregistered spell");
        return Err(ActionError::UnknownSpell(spell_id));
    };
    let spell_name = spell.name.to_string();
    if state.hero.learn_spell(spell_id) {
        info!(spell = %spell_name, "hero learned spell");
        sink.emphasize(&format!("You learned {spell_name}."), Emphasis::Highlight);
    } else {
        sink.say(&format!("You already knew {spell_name}."));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Creatures
// ---------------------------------------------------------------------------

/// Drink milk from a milkable creature on the hero's location.
///
/// Without tokens the target is picked automatically when every visible
/// milkable creature shares one name.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance.
pub fn milk(
    state: &mut GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let target = if tokens.is_empty() {
        milkable_in_sight(state, sink)?
    } else {
        let Some(id) = selection::target_creature(state, tokens, sink)? else {
            return Ok(());
        };
        let milkable = state
            .hero_location()?
            .creature(id)
            .is_some_and(|creature| creature.has_tag(CreatureTag::Milkable));
        if !milkable {
            sink.say("This creature is not milkable.");
            return Ok(());
        }
        Some(id)
    };
    let Some(id) = target else {
        return Ok(());
    };
    let name = creature_name(state, id).unwrap_or_default();

    state.advance_time(costs::MILK)?;

    if state.hero_location()?.creature(id).is_none() {
        sink.say(&no_longer_there(&name));
        return Ok(());
    }
    sink.say(&format!("You drink milk directly from {name}."));
    heal(state, costs::MILK_NUTRITION, sink);
    Ok(())
}

/// The single kind of milkable creature in sight, if there is one.
fn milkable_in_sight(
    state: &GameState,
    sink: &mut dyn ReportSink,
) -> Result<Option<CreatureId>, ActionError> {
    let location = state.hero_location()?;
    let milkable: Vec<&Creature> = filter_visible(
        location.creatures.iter(),
        state.hero.creature.id,
        state.luminosity()?,
    )
    .into_iter()
    .filter(|creature| creature.has_tag(CreatureTag::Milkable))
    .collect();
    if milkable.is_empty() {
        sink.say("You can't find a milkable creature.");
        return Ok(None);
    }
    if !all_share_one_name(milkable.iter().copied()) {
        sink.say("You need to be more specific.");
        return Ok(None);
    }
    Ok(milkable.first().map(|creature| creature.id))
}

/// Hand a creature over to the combat subsystem.
///
/// # Errors
///
/// Propagates whatever the resolver returns.
pub fn attack(
    state: &mut GameState,
    tokens: &[&str],
    combat: &mut dyn CombatResolver,
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let Some(id) = selection::target_creature(state, tokens, sink)? else {
        return Ok(());
    };
    if id == state.hero.creature.id {
        sink.say("You cannot attack yourself.");
        return Ok(());
    }
    combat.resolve(state, id, sink)
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// Rest until health reaches the resting cap.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance.
pub fn rest(state: &mut GameState, sink: &mut dyn ReportSink) -> Result<(), ActionError> {
    let health = state.hero.creature.health;
    let cap = Percentage::from_permille(costs::REST_CAP_PERMILLE).of(health.maximum);
    if health.current >= cap {
        sink.say("You are already rested.");
        return Ok(());
    }
    let recovered = cap.saturating_sub(health.current);

    state.advance_time(costs::rest_duration(recovered, health.maximum))?;

    sink.say("Resting...");
    heal(state, recovered, sink);
    sink.say("You feel rested.");
    Ok(())
}

/// Walk to the neighbouring location in the given direction.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance or the destination
/// cannot be described.
pub fn walk(
    state: &mut GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let Some(token) = tokens.first() else {
        sink.say("You must specify a direction.");
        return Ok(());
    };
    let Some(direction) = Direction::parse(token) else {
        sink.say("Invalid direction.");
        return Ok(());
    };
    let from = state.hero.position;
    let destination = from.step(direction);
    let blocked = state.hero_location()?.is_blocked(direction);
    let Some(destination) = destination.filter(|_| !blocked) else {
        sink.say("You cannot go that way.");
        return Ok(());
    };

    state.advance_time(costs::WALK)?;

    state.relocate_hero(destination);
    info!(%from, to = %destination, %direction, "hero moved");
    perception::look(state, Some(direction.opposite()), sink)
}
