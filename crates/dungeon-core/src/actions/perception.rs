//! What the hero perceives: surroundings, belongings, self, and time.
//!
//! Only [`read_time`] costs anything, and only when a clock has to be
//! consulted.

use chrono::{Datelike, Months, NaiveDateTime};
use dungeon_types::{Direction, ItemId, Name};
use dungeon_world::Item;

use super::costs;
use super::handlers::no_longer_in_inventory;
use crate::error::ActionError;
use crate::hero::Hero;
use crate::report::{Emphasis, ReportSink, enumerate, enumerate_names};
use crate::state::GameState;
use crate::visibility::{can_see_adjacent, filter_visible};

/// Date format used when the hero guesses the day.
const DATE_FORMAT: &str = "%B %-d, %Y";

/// Describe the hero's location.
///
/// `arrived_from` switches to the arrival phrasing and leaves the direction
/// the hero came from out of the neighbour list.
///
/// # Errors
///
/// Returns [`ActionError`] if the location or its neighbours cannot be
/// loaded.
pub fn look(
    state: &mut GameState,
    arrived_from: Option<Direction>,
    sink: &mut dyn ReportSink,
) -> Result<(), ActionError> {
    let position = state.hero.position;
    let now = state.now();
    state.world.ensure_neighbours_loaded(position, now)?;

    let part = state.part_of_day();
    let location = state.hero_location()?;
    let luminosity = location.luminosity(part);
    let opening = if arrived_from.is_some() {
        "You arrive at"
    } else {
        "You are at"
    };
    sink.say(&format!(
        "{opening} {}. {} It is {part}.",
        location.name, location.description
    ));

    if can_see_adjacent(luminosity) {
        let mut groups: Vec<(&Name, Vec<&str>)> = Vec::new();
        for direction in Direction::all_except(arrived_from) {
            let Some(neighbour) = position.step(direction).and_then(|p| state.world.get(p)) else {
                continue;
            };
            match groups.iter_mut().find(|(name, _)| *name == &neighbour.name) {
                Some((_, directions)) => directions.push(direction.as_str()),
                None => groups.push((&neighbour.name, vec![direction.as_str()])),
            }
        }
        for (name, directions) in &groups {
            sink.say(&format!("To {} you see {name}.", enumerate(directions)));
        }
    } else {
        sink.say("You can't clearly see the surrounding locations.");
    }

    let observer = state.hero.creature.id;
    let creatures = filter_visible(location.creatures.iter(), observer, luminosity);
    if creatures.is_empty() {
        sink.say("You don't see anyone here.");
    } else {
        let names = enumerate_names(creatures.iter().map(|creature| &creature.name));
        sink.say(&format!("Here you can see {names}."));
    }

    let items = filter_visible(location.inventory.items(), observer, luminosity);
    if !items.is_empty() {
        let names = enumerate_names(items.iter().map(|item| &item.name));
        sink.say(&format!("On the ground you see {names}."));
    }
    Ok(())
}

/// Report how much the hero carries and can carry, then list the items.
pub fn inventory(state: &GameState, sink: &mut dyn ReportSink) {
    let inventory = &state.hero.inventory;
    let unit = Name::regular("item");
    if inventory.is_empty() {
        sink.say("Your inventory is empty.");
    } else {
        sink.say(&format!(
            "You are carrying {}. Your inventory weights {}.",
            unit.quantified(u64::from(inventory.item_count())),
            inventory.weight()
        ));
    }
    sink.say(&format!(
        "Your maximum carrying capacity is {} and {}.",
        unit.quantified(u64::from(inventory.item_limit())),
        inventory.weight_limit()
    ));
    if inventory.is_empty() {
        return;
    }
    sink.say("You are carrying:");
    for item in inventory.items() {
        let entry = format!("{} ({})", item.qualified_name(), item.weight);
        if state.hero.is_equipped(item.id) {
            sink.say(&format!(" [Equipped] {entry}"));
        } else {
            sink.say(&format!(" {entry}"));
        }
    }
}

/// Report health, attack, and weapon.
pub fn status(state: &GameState, sink: &mut dyn ReportSink) {
    let hero = &state.hero.creature;
    sink.emphasize(
        &format!("You are {}.", hero.health.state().as_str()),
        Emphasis::Info,
    );
    sink.emphasize(
        &format!("Your base attack is {}.", hero.attack),
        Emphasis::Info,
    );
    match state.hero.weapon_item() {
        Some(weapon) => {
            let damage = weapon.weapon.map_or(0, |component| component.damage);
            sink.emphasize(
                &format!(
                    "You are currently equipping {}, whose base damage is {damage}. \
                     This makes your total damage {}.",
                    weapon.qualified_name(),
                    hero.attack.saturating_add(damage)
                ),
                Emphasis::Info,
            );
        }
        None => sink.emphasize("You are fighting bare-handed.", Emphasis::Info),
    }
}

/// Report the hero's age in whole years and leftover days.
pub fn age(state: &GameState, sink: &mut dyn ReportSink) {
    let (years, days) = age_at(state.hero.date_of_birth, state.now());
    sink.emphasize(
        &format!("You are {years} years and {days} days old."),
        Emphasis::Info,
    );
}

/// Whole years and remaining days between `birth` and `now`.
fn age_at(birth: NaiveDateTime, now: NaiveDateTime) -> (u32, i64) {
    let (birth, today) = (birth.date(), now.date());
    let mut years = today.year().saturating_sub(birth.year());
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years = years.saturating_sub(1);
    }
    let years = u32::try_from(years).unwrap_or(0);
    let anniversary = birth
        .checked_add_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(birth);
    let days = today.signed_duration_since(anniversary).num_days();
    (years, days)
}

/// Tell the time from the best clock carried, then the date and part of day.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance.
pub fn read_time(state: &mut GameState, sink: &mut dyn ReportSink) -> Result<(), ActionError> {
    if let Some((id, equipped)) = best_clock(&state.hero) {
        let name = state
            .hero
            .inventory
            .get(id)
            .map(|item| item.name.singular.clone())
            .unwrap_or_default();
        let cost = if equipped {
            costs::READ_EQUIPPED_CLOCK
        } else {
            costs::READ_CARRIED_CLOCK
        };
        let now = state.advance_time(cost)?;
        match state.hero.inventory.get(id).and_then(|item| item.clock_reading(now)) {
            Some(reading) => sink.say(&reading),
            None => sink.say(&no_longer_in_inventory(&name)),
        }
    }

    let now = state.now();
    sink.say(&format!("You think it is {}.", now.format(DATE_FORMAT)));
    let birth = state.hero.date_of_birth;
    if birth.month() == now.month() && birth.day() == now.day() {
        sink.emphasize("Today is your birthday.", Emphasis::Highlight);
    }
    sink.say(&format!("You can see that it is {}.", state.part_of_day()));
    Ok(())
}

/// The clock to read and whether it is the equipped one.
///
/// Working clocks win over broken ones and the equipped item wins ties.
fn best_clock(hero: &Hero) -> Option<(ItemId, bool)> {
    let is_clock = |item: &&Item| item.clock.is_some();
    let equipped = hero.weapon_item().filter(is_clock);
    if let Some(weapon) = equipped.filter(|item| !item.is_broken()) {
        return Some((weapon.id, true));
    }
    let mut clocks = hero.inventory.items().iter().filter(is_clock);
    if let Some(working) = clocks.clone().find(|item| !item.is_broken()) {
        return Some((working.id, false));
    }
    if let Some(weapon) = equipped {
        return Some((weapon.id, true));
    }
    clocks.next().map(|item| (item.id, false))
}

/// List the spells the hero knows.
pub fn spells(state: &GameState, sink: &mut dyn ReportSink) {
    let known = state.hero.spells();
    if known.is_empty() {
        sink.say("You have not learned any spells yet.");
        return;
    }
    let names: Vec<String> = known
        .iter()
        .map(|id| {
            state
                .spells
                .get(id)
                .map_or_else(|| id.to_string(), |spell| spell.name.to_string())
        })
        .collect();
    sink.say(&format!("You know {}.", enumerate(&names)));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use dungeon_types::{Percentage, Point};
    use dungeon_world::{Creature, Location, LocationGenerator};

    use super::*;
    use crate::config::GameConfig;
    use crate::report::Transcript;

    /// Forests everywhere except a meadow to the east of the origin.
    struct Ring;

    impl LocationGenerator for Ring {
        fn generate(&mut self, point: Point, _now: NaiveDateTime) -> Location {
            if point == Point::new(1, 0) {
                Location::new(Name::regular("Meadow"), "Grass.", Percentage::ONE)
            } else {
                Location::new(Name::regular("Forest"), "Trees.", Percentage::ONE)
            }
        }
    }

    fn make_state() -> GameState {
        let mut config = GameConfig::default();
        config.world.start_date = at(2055, 6, 4, 12);
        GameState::new(&config, Box::new(Ring))
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn look_groups_neighbours_by_name() {
        let mut state = make_state();
        let mut sink = Transcript::new();

        look(&mut state, None, &mut sink).unwrap();

        assert_eq!(sink.lines().first().copied(), Some("You are at Forest. Trees. It is noon."));
        assert!(sink.contains("To north, south and west you see Forest."));
        assert!(sink.contains("To east you see Meadow."));
        assert!(sink.contains("You don't see anyone here."));
    }

    #[test]
    fn look_counts_creatures() {
        let mut state = make_state();
        let location = state.hero_location_mut().unwrap();
        for name in ["Rat", "Rat", "Cow"] {
            location.add_creature(Creature::new(Name::regular(name), 5, 1, Percentage::ONE));
        }
        let mut sink = Transcript::new();

        look(&mut state, Some(Direction::West), &mut sink).unwrap();

        assert!(sink.contains("Here you can see 2 Rats and 1 Cow."));
        assert!(!sink.lines().iter().any(|line| line.contains("west")));
    }

    #[test]
    fn darkness_hides_the_neighbours() {
        let mut state = make_state();
        state.hero_location_mut().unwrap().light_permittivity = Percentage::ZERO;
        let mut sink = Transcript::new();

        look(&mut state, None, &mut sink).unwrap();

        assert!(sink.contains("You can't clearly see the surrounding locations."));
    }

    #[test]
    fn age_counts_years_and_days() {
        let birth = at(2035, 6, 4, 8);
        assert_eq!(age_at(birth, at(2055, 6, 4, 12)), (20, 0));
        assert_eq!(age_at(birth, at(2055, 6, 14, 12)), (20, 10));
        assert_eq!(age_at(birth, at(2055, 6, 3, 12)).0, 19);
    }

    #[test]
    fn birthday_is_noticed() {
        let mut state = make_state();
        let mut sink = Transcript::new();

        read_time(&mut state, &mut sink).unwrap();

        assert!(sink.contains("You think it is June 4, 2055."));
        assert!(sink.contains("Today is your birthday."));
    }

    #[test]
    fn carried_clock_costs_ten_seconds() {
        let mut state = make_state();
        let watch = Item::new(Name::regular("Watch"), 1, 5, Percentage::ONE, state.now()).with_clock();
        state.hero.add_item(watch).unwrap();
        let mut sink = Transcript::new();

        read_time(&mut state, &mut sink).unwrap();

        assert_eq!(sink.lines().first().copied(), Some("The clock displays 12:00:10."));
    }

    #[test]
    fn equipped_clock_costs_four_seconds() {
        let mut state = make_state();
        let watch = Item::new(Name::regular("Watch"), 1, 5, Percentage::ONE, state.now())
            .with_clock()
            .with_weapon(1);
        let id = watch.id;
        state.hero.add_item(watch).unwrap();
        state.hero.set_weapon(id).unwrap();
        let mut sink = Transcript::new();

        read_time(&mut state, &mut sink).unwrap();

        assert_eq!(sink.lines().first().copied(), Some("The clock displays 12:00:04."));
    }

    #[test]
    fn clock_rotting_while_read_is_no_longer_carried() {
        let mut state = make_state();
        let watch = Item::new(Name::regular("Watch"), 1, 5, Percentage::ONE, state.now())
            .with_clock()
            .with_decomposition(5);
        state.hero.add_item(watch).unwrap();
        let start = state.now();
        let mut sink = Transcript::new();

        read_time(&mut state, &mut sink).unwrap();

        assert_eq!(
            sink.lines().first().copied(),
            Some("Watch is no longer in your inventory.")
        );
        assert!(sink.contains("You can see that it is noon."));
        assert!(state.hero.inventory.is_empty());
        assert_eq!(state.now().signed_duration_since(start).num_seconds(), 10);
    }

    #[test]
    fn working_clock_beats_broken_equipped_one() {
        let mut hero = Hero::new(&crate::config::HeroConfig::default());
        let now = at(2055, 6, 4, 12);
        let mut broken = Item::new(Name::regular("Sundial"), 1, 5, Percentage::ONE, now)
            .with_clock()
            .with_weapon(1);
        broken.decrement_integrity_to_zero(now);
        let broken_id = broken.id;
        let working = Item::new(Name::regular("Watch"), 1, 5, Percentage::ONE, now).with_clock();
        let working_id = working.id;
        hero.add_item(broken).unwrap();
        hero.add_item(working).unwrap();
        hero.set_weapon(broken_id).unwrap();

        assert_eq!(best_clock(&hero), Some((working_id, false)));
    }

    #[test]
    fn spell_list() {
        let mut state = make_state();
        let mut sink = Transcript::new();
        spells(&state, &mut sink);
        assert_eq!(sink.last(), Some("You have not learned any spells yet."));

        state.hero.learn_spell(dungeon_types::SpellId::new("UNVEIL"));
        spells(&state, &mut sink);
        assert_eq!(sink.last(), Some("You know Unveil."));

        state.hero.learn_spell(dungeon_types::SpellId::new("HEAL_SELF"));
        spells(&state, &mut sink);
        assert_eq!(sink.last(), Some("You know Unveil and Heal Self."));
    }

    #[test]
    fn inventory_reports_counts_limits_and_the_weapon() {
        let mut state = make_state();
        let mut sink = Transcript::new();
        inventory(&state, &mut sink);
        assert_eq!(sink.lines().first().copied(), Some("Your inventory is empty."));
        assert_eq!(sink.lines().len(), 2);

        let now = state.now();
        let stick = Item::new(Name::regular("Stick"), 5, 5, Percentage::ONE, now).with_weapon(2);
        let stick_id = stick.id;
        let apple = Item::new(Name::regular("Apple"), 1, 5, Percentage::ONE, now);
        state.hero.add_item(stick).unwrap();
        state.hero.add_item(apple).unwrap();
        state.hero.set_weapon(stick_id).unwrap();
        let mut sink = Transcript::new();

        inventory(&state, &mut sink);

        let lines = sink.lines();
        assert_eq!(
            lines.first().copied(),
            Some("You are carrying 2 items. Your inventory weights 6.")
        );
        assert!(sink.contains("You are carrying:"));
        assert!(sink.contains(" [Equipped] Stick (5)"));
        assert_eq!(sink.last(), Some(" Apple (1)"));
    }

    #[test]
    fn status_mentions_bare_hands() {
        let state = make_state();
        let mut sink = Transcript::new();
        status(&state, &mut sink);
        assert!(sink.contains("You are uninjured."));
        assert_eq!(sink.last(), Some("You are fighting bare-handed."));
    }
}
