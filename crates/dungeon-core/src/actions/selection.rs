//! Target resolution shared by the hero actions.
//!
//! Every function here only reads the game. It returns the id of the chosen
//! entity so the caller holds no borrow when it pays the time cost, and it
//! reports the reason when nothing could be chosen.

use dungeon_types::{CreatureId, ItemId};
use dungeon_world::{Creature, Item};

use crate::error::ActionError;
use crate::matcher::{Selection, all_share_one_name, disambiguate, find_matches};
use crate::report::ReportSink;
use crate::state::GameState;
use crate::visibility::filter_visible;

/// Reported when the tokens fit nothing.
pub const ITEM_NOT_FOUND: &str = "Item not found.";
/// Reported when the tokens fit no creature.
pub const CREATURE_NOT_FOUND: &str = "Creature not found.";
/// Reported when the tokens fit several differently named entities.
pub const AMBIGUOUS: &str = "Provided input is ambiguous in this context.";

/// Choose an item lying on the hero's location among the visible ones.
///
/// `nothing_visible` is reported when the hero sees no item at all.
///
/// # Errors
///
/// Returns [`ActionError::MissingLocation`] if the hero's location is not
/// loaded.
pub fn location_item(
    state: &GameState,
    tokens: &[&str],
    nothing_visible: &str,
    sink: &mut dyn ReportSink,
) -> Result<Option<ItemId>, ActionError> {
    let location = state.hero_location()?;
    let visible = filter_visible(
        location.inventory.items(),
        state.hero.creature.id,
        state.luminosity()?,
    );
    if visible.is_empty() {
        sink.say(nothing_visible);
        return Ok(None);
    }
    Ok(choose_item(state, &visible, tokens, sink))
}

/// Choose an item the hero carries. Visibility does not matter here.
pub fn inventory_item(
    state: &GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Option<ItemId> {
    if state.hero.inventory.is_empty() {
        sink.say("Your inventory is empty.");
        return None;
    }
    let carried: Vec<&Item> = state.hero.inventory.items().iter().collect();
    choose_item(state, &carried, tokens, sink)
}

/// Choose a creature on the hero's location. The hero is a candidate too.
///
/// # Errors
///
/// Returns [`ActionError::MissingLocation`] if the hero's location is not
/// loaded.
pub fn target_creature(
    state: &GameState,
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Result<Option<CreatureId>, ActionError> {
    let location = state.hero_location()?;
    let hero = &state.hero.creature;
    let visible = filter_visible(
        core::iter::once(hero).chain(location.creatures.iter()),
        hero.id,
        state.luminosity()?,
    );
    if tokens.is_empty() {
        let others = visible.iter().copied().filter(|creature| creature.id != hero.id);
        if !all_share_one_name(others) {
            sink.say("You must specify a target.");
            return Ok(None);
        }
    }
    let result = find_matches(&*state.matcher, visible.iter().copied(), tokens);
    let selection =
        disambiguate(&result, Some(state.hero.name())).map(|creature: &Creature| creature.id);
    Ok(report(selection, CREATURE_NOT_FOUND, sink))
}

/// Shared item path: auto-resolve on empty tokens, then match.
fn choose_item(
    state: &GameState,
    candidates: &[&Item],
    tokens: &[&str],
    sink: &mut dyn ReportSink,
) -> Option<ItemId> {
    if tokens.is_empty() && !all_share_one_name(candidates.iter().copied()) {
        sink.say("You must specify an item.");
        return None;
    }
    let result = find_matches(&*state.matcher, candidates.iter().copied(), tokens);
    let selection = disambiguate(&result, None).map(|item: &Item| item.id);
    report(selection, ITEM_NOT_FOUND, sink)
}

/// Turn a selection into an id, reporting failures.
fn report<T>(selection: Selection<T>, not_found: &str, sink: &mut dyn ReportSink) -> Option<T> {
    match selection {
        Selection::Found(id) => Some(id),
        Selection::NotFound => {
            sink.say(not_found);
            None
        }
        Selection::Ambiguous => {
            sink.say(AMBIGUOUS);
            None
        }
    }
}

/// Display name of a creature, for callers that only kept its id.
pub fn creature_name(state: &GameState, id: CreatureId) -> Option<String> {
    if state.hero.creature.id == id {
        return Some(state.hero.name().to_string());
    }
    state
        .hero_location()
        .ok()?
        .creature(id)
        .map(|creature| creature.name.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDateTime;
    use dungeon_types::{Name, Percentage, Point};
    use dungeon_world::{Location, LocationGenerator};

    use super::*;
    use crate::config::GameConfig;
    use crate::report::Transcript;

    struct Bare;

    impl LocationGenerator for Bare {
        fn generate(&mut self, _point: Point, _now: NaiveDateTime) -> Location {
            Location::new(Name::regular("Room"), "A room.", Percentage::ONE)
        }
    }

    fn make_state(creatures: &[&str]) -> GameState {
        let mut state = GameState::new(&GameConfig::default(), Box::new(Bare));
        let location = state.hero_location_mut().unwrap();
        for name in creatures {
            location.add_creature(Creature::new(Name::regular(*name), 10, 1, Percentage::ONE));
        }
        state
    }

    fn name_of(state: &GameState, id: Option<CreatureId>) -> Option<String> {
        id.and_then(|id| creature_name(state, id))
    }

    #[test]
    fn two_rats_resolve_to_the_first() {
        let state = make_state(&["Rat", "Rat"]);
        let mut sink = Transcript::new();
        let chosen = target_creature(&state, &[], &mut sink).unwrap();
        let first = state.hero_location().unwrap().creatures.first().map(|c| c.id);
        assert_eq!(chosen, first);
        assert!(sink.reports.is_empty());
    }

    #[test]
    fn mixed_names_need_a_target() {
        for names in [&["Rat", "Rat", "Goblin"][..], &["Rat", "Goblin"][..]] {
            let state = make_state(names);
            let mut sink = Transcript::new();
            assert_eq!(target_creature(&state, &[], &mut sink).unwrap(), None);
            assert_eq!(sink.last(), Some("You must specify a target."));
        }
    }

    #[test]
    fn hero_name_breaks_ties() {
        let mut state = make_state(&["Wolf", "Wolf"]);
        state.hero.creature.name = Name::regular("Wolfgang");
        let mut sink = Transcript::new();
        let chosen = target_creature(&state, &["wolf"], &mut sink).unwrap();
        assert_eq!(name_of(&state, chosen).as_deref(), Some("Wolf"));
    }

    #[test]
    fn unknown_creature_is_reported() {
        let state = make_state(&["Rat"]);
        let mut sink = Transcript::new();
        assert_eq!(target_creature(&state, &["dragon"], &mut sink).unwrap(), None);
        assert_eq!(sink.last(), Some(CREATURE_NOT_FOUND));
    }

    #[test]
    fn empty_inventory_is_reported() {
        let state = make_state(&[]);
        let mut sink = Transcript::new();
        assert_eq!(inventory_item(&state, &["stick"], &mut sink), None);
        assert_eq!(sink.last(), Some("Your inventory is empty."));
    }
}
