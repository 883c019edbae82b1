//! End-to-end scenarios for the hero action protocol.
//!
//! Every test drives the public API the way a front end does: build a
//! [`GameState`], parse a verb, execute it, and inspect the recorded
//! report lines and the resulting world.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use dungeon_core::actions::handlers;
use dungeon_core::{
    ActionError, GameConfig, GameState, NarratingCombat, SharedGame, Transcript, Verb,
};
use dungeon_types::{CreatureTag, ItemTag, Name, Percentage, Point};
use dungeon_world::{Creature, FoodComponent, Item, Location, LocationGenerator};

/// Every location is an empty, fully lit room.
struct Rooms;

impl LocationGenerator for Rooms {
    fn generate(&mut self, _point: Point, _now: NaiveDateTime) -> Location {
        Location::new(Name::regular("Room"), "A bare room.", Percentage::ONE)
    }
}

fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2055, 6, 2)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn make_state(hour: u32) -> GameState {
    let mut config = GameConfig::default();
    config.world.start_date = at(hour);
    config.timing.sleep_ms_per_hour = 0;
    GameState::new(&config, Box::new(Rooms))
}

fn run(state: &mut GameState, line: &str) -> Transcript {
    let mut words = line.split_whitespace();
    let verb = Verb::parse(words.next().unwrap()).unwrap();
    let tokens: Vec<&str> = words.collect();
    let mut sink = Transcript::new();
    dungeon_core::execute(state, verb, &tokens, &mut NarratingCombat, &mut sink).unwrap();
    sink
}

fn elapsed(state: &GameState, since: NaiveDateTime) -> i64 {
    state.now().signed_duration_since(since).num_seconds()
}

fn item(state: &GameState, name: &str, weight: u32) -> Item {
    Item::new(Name::regular(name), weight, 10, Percentage::ONE, state.now())
}

// =========================================================================
// Target selection
// =========================================================================

#[test]
fn two_wolves_and_the_hero_resolve_to_a_wolf() {
    let mut state = make_state(12);
    let location = state.hero_location_mut().unwrap();
    for _ in 0..2 {
        location.add_creature(Creature::new(Name::new("Wolf", "Wolves"), 20, 3, Percentage::ONE));
    }

    let sink = run(&mut state, "attack");

    assert_eq!(sink.last(), Some("Hero attacks Wolf."));
}

#[test]
fn mixed_creatures_need_a_target() {
    let mut state = make_state(12);
    let location = state.hero_location_mut().unwrap();
    for name in ["Rat", "Rat", "Goblin"] {
        location.add_creature(Creature::new(Name::regular(name), 5, 1, Percentage::ONE));
    }

    let sink = run(&mut state, "attack");

    assert_eq!(sink.last(), Some("You must specify a target."));
}

#[test]
fn dim_light_hides_faint_items() {
    let mut state = make_state(0);
    let faint = Item::new(Name::regular("Ring"), 1, 1, Percentage::from_permille(100), state.now());
    state.hero_location_mut().unwrap().add_item(faint).unwrap();
    let start = state.now();

    let sink = run(&mut state, "take ring");

    assert_eq!(sink.last(), Some("You do not see any item you could pick up."));
    assert_eq!(elapsed(&state, start), 0);
}

// =========================================================================
// Costs and re-validation
// =========================================================================

#[test]
fn clock_moves_by_exactly_the_action_cost() {
    let mut state = make_state(12);
    let stick = item(&state, "Stick", 5).with_weapon(3);
    state.hero_location_mut().unwrap().add_item(stick).unwrap();
    let start = state.now();

    run(&mut state, "take stick");
    assert_eq!(elapsed(&state, start), 10);
    run(&mut state, "equip stick");
    assert_eq!(elapsed(&state, start), 16);
    run(&mut state, "unequip");
    assert_eq!(elapsed(&state, start), 20);
    run(&mut state, "unequip");
    assert_eq!(elapsed(&state, start), 20);
    run(&mut state, "drop stick");
    assert_eq!(elapsed(&state, start), 22);
    run(&mut state, "look");
    assert_eq!(elapsed(&state, start), 22);
}

#[test]
fn item_rotting_during_pick_up_is_no_longer_there() {
    let mut state = make_state(12);
    let fig = item(&state, "Fig", 1).with_decomposition(5);
    state.hero_location_mut().unwrap().add_item(fig).unwrap();
    let start = state.now();

    let sink = run(&mut state, "take fig");

    assert_eq!(sink.last(), Some("Fig is no longer there."));
    assert!(state.hero.inventory.is_empty());
    assert_eq!(elapsed(&state, start), 10);
}

#[test]
fn destroying_a_vanished_item_still_costs_time() {
    let mut state = make_state(12);
    let fig = item(&state, "Fig", 1).with_decomposition(60);
    state.hero_location_mut().unwrap().add_item(fig).unwrap();
    let start = state.now();

    let sink = run(&mut state, "destroy fig");

    assert_eq!(sink.last(), Some("Fig is no longer there."));
    assert_eq!(elapsed(&state, start), 120);
}

#[test]
fn food_rotting_while_eaten_heals_nothing() {
    let mut state = make_state(12);
    let fig = item(&state, "Fig", 1)
        .with_food(FoodComponent {
            nutrition: 10,
            integrity_decrement_on_eat: 2,
        })
        .with_decomposition(10);
    state.hero.add_item(fig).unwrap();
    state.hero.creature.health.decrement_by(30);
    let start = state.now();

    let sink = run(&mut state, "eat fig");

    assert_eq!(sink.lines(), vec!["Fig is no longer in your inventory."]);
    assert!(state.hero.inventory.is_empty());
    assert_eq!(state.hero.creature.health.current, 20);
    assert_eq!(elapsed(&state, start), 30);
}

#[test]
fn item_rotting_while_dropped_never_reaches_the_ground() {
    let mut state = make_state(12);
    let fig = item(&state, "Fig", 1).with_decomposition(1);
    state.hero.add_item(fig).unwrap();
    let start = state.now();

    let sink = run(&mut state, "drop fig");

    assert_eq!(sink.last(), Some("Fig is no longer in your inventory."));
    assert!(state.hero.inventory.is_empty());
    assert!(state.hero_location().unwrap().inventory.is_empty());
    assert_eq!(elapsed(&state, start), 2);
}

#[test]
fn weapon_rotting_while_equipped_is_not_wielded() {
    let mut state = make_state(12);
    let club = item(&state, "Club", 3).with_weapon(2).with_decomposition(3);
    state.hero.add_item(club).unwrap();
    let start = state.now();

    let sink = run(&mut state, "equip club");

    assert_eq!(sink.last(), Some("Club is no longer in your inventory."));
    assert!(state.hero.weapon().is_none());
    assert_eq!(elapsed(&state, start), 6);
}

#[test]
fn book_rotting_while_read_teaches_nothing() {
    let mut state = make_state(12);
    let scroll = item(&state, "Scroll", 1)
        .with_book(dungeon_world::BookComponent {
            text: "Words.".to_owned(),
            spell: Some(dungeon_types::SpellId::new("UNVEIL")),
            time_to_read: 30,
        })
        .with_decomposition(10);
    state.hero.add_item(scroll).unwrap();
    let start = state.now();

    let sink = run(&mut state, "read scroll");

    assert_eq!(sink.lines(), vec!["Scroll is no longer in your inventory."]);
    assert!(state.hero.spells().is_empty());
    assert_eq!(elapsed(&state, start), 30);
}

#[test]
fn full_inventory_refuses_for_free() {
    let mut config = GameConfig::default();
    config.world.start_date = at(12);
    config.hero.item_limit = 1;
    config.hero.weight_limit = 10;
    let mut state = GameState::new(&config, Box::new(Rooms));
    let first = item(&state, "Stone", 5);
    let second = item(&state, "Stone", 5);
    state.hero_location_mut().unwrap().add_item(first).unwrap();
    state.hero_location_mut().unwrap().add_item(second).unwrap();
    let start = state.now();

    let sink = run(&mut state, "take stone");
    assert_eq!(sink.last(), Some("Added Stone to the inventory."));

    let sink = run(&mut state, "take stone");
    assert_eq!(sink.last(), Some("Your inventory is full."));
    assert_eq!(elapsed(&state, start), 10);
}

// =========================================================================
// Healing
// =========================================================================

#[test]
fn resting_when_rested_changes_nothing() {
    let mut state = make_state(12);
    state.hero.creature.health.decrement_by(20);
    let start = state.now();

    let sink = run(&mut state, "rest");

    assert_eq!(sink.last(), Some("You are already rested."));
    assert_eq!(state.hero.creature.health.current, 30);
    assert_eq!(elapsed(&state, start), 0);
}

#[test]
fn last_bite_heals_fully_and_removes_the_food() {
    let mut state = make_state(12);
    let mut bread = item(&state, "Bread", 1).with_food(FoodComponent {
        nutrition: 10,
        integrity_decrement_on_eat: 4,
    });
    bread.integrity.current = 4;
    state.hero.add_item(bread).unwrap();
    state.hero.creature.health.decrement_by(30);

    let sink = run(&mut state, "eat bread");

    assert_eq!(sink.last(), Some("You ate Bread."));
    assert!(state.hero.inventory.is_empty());
    assert_eq!(state.hero.creature.health.current, 30);
}

#[test]
fn partial_bites_heal_in_proportion() {
    let mut state = make_state(12);
    let mut pie = item(&state, "Pie", 1).with_food(FoodComponent {
        nutrition: 9,
        integrity_decrement_on_eat: 3,
    });
    pie.integrity.current = 4;
    state.hero.add_item(pie).unwrap();
    state.hero.creature.health.decrement_by(40);

    let sink = run(&mut state, "eat pie");
    assert_eq!(sink.last(), Some("You ate a bit of Pie."));
    assert_eq!(state.hero.creature.health.current, 19);
    assert_eq!(state.hero.inventory.item_count(), 1);

    let sink = run(&mut state, "eat pie");
    assert_eq!(sink.last(), Some("You ate Pie."));
    assert_eq!(state.hero.creature.health.current, 22);
    assert!(state.hero.inventory.is_empty());
}

#[test]
fn milking_the_only_cow() {
    let mut state = make_state(12);
    state.hero.creature.health.decrement_by(5);
    state.hero_location_mut().unwrap().add_creature(
        Creature::new(Name::regular("Cow"), 30, 1, Percentage::ONE)
            .with_tag(CreatureTag::Milkable),
    );
    let start = state.now();

    let sink = run(&mut state, "milk");

    assert!(sink.contains("You drink milk directly from Cow."));
    assert_eq!(sink.last(), Some("You are completely healed."));
    assert_eq!(elapsed(&state, start), 45);
}

#[test]
fn sleeping_five_hours_to_dawn() {
    let mut state = make_state(0);
    state.hero.creature.health.decrement_by(30);

    let sink = run(&mut state, "sleep");

    assert_eq!(state.gate.advancements(), 2);
    assert_eq!(sink.lines().first().copied(), Some("You fall asleep."));
    assert_eq!(sink.last(), Some("You wake up."));
    assert!(state.hero.creature.health.current > 20);
}

// =========================================================================
// Books and spells
// =========================================================================

#[test]
fn reading_a_tome_teaches_once() {
    let mut state = make_state(12);
    let tome = dungeon_world::ItemPreset::Tome.make(state.now());
    state.hero.add_item(tome).unwrap();

    let sink = run(&mut state, "read tome");
    assert_eq!(sink.last(), Some("You learned Heal Self."));

    let sink = run(&mut state, "read tome");
    assert_eq!(sink.last(), Some("You already knew Heal Self."));

    let sink = run(&mut state, "spells");
    assert_eq!(sink.last(), Some("You know Heal Self."));
}

#[test]
fn unknown_spells_are_errors() {
    let mut state = make_state(12);
    let scroll = item(&state, "Scroll", 1).with_book(dungeon_world::BookComponent {
        text: "Words.".to_owned(),
        spell: Some(dungeon_types::SpellId::new("FIREBALL")),
        time_to_read: 30,
    });
    state.hero.add_item(scroll).unwrap();
    let mut sink = Transcript::new();

    let result = handlers::read(&mut state, &["scroll"], &mut sink);

    assert!(matches!(result, Err(ActionError::UnknownSpell(_))));
}

// =========================================================================
// Preset world
// =========================================================================

#[test]
fn preset_origin_session() {
    let mut config = GameConfig::default();
    config.world.start_date = at(12);
    let mut state = GameState::from_config(&config);

    let sink = run(&mut state, "look");
    assert!(sink.lines().iter().any(|line| line.starts_with("On the ground you see")));

    run(&mut state, "take stick");
    run(&mut state, "wield stick");
    let sink = run(&mut state, "status");
    assert!(sink.lines().iter().any(|line| line.starts_with("You are currently equipping Stick")));

    let sink = run(&mut state, "time");
    assert!(sink.contains("You can see that it is noon."));
    assert!(state.hero.inventory.items().iter().any(|item| item.has_tag(ItemTag::Weapon)));
}

#[test]
fn shared_game_runs_commands_from_many_threads() {
    let mut state = make_state(12);
    for _ in 0..4 {
        let stone = item(&state, "Stone", 1);
        state.hero_location_mut().unwrap().add_item(stone).unwrap();
    }
    let shared = Arc::new(SharedGame::new(state));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                let mut sink = Transcript::new();
                shared
                    .execute(Verb::PickUp, &["stone"], &mut NarratingCombat, &mut sink)
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let (carried, advancements) = shared
        .with_state(|state| (state.hero.inventory.item_count(), state.gate.advancements()))
        .unwrap();
    assert_eq!(carried, 4);
    assert_eq!(advancements, 4);
}
