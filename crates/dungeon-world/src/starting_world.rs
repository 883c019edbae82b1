//! Preset content and the default location generator.
//!
//! [`PresetGenerator`] builds a small, seeded world out of four kinds of
//! terrain, four creatures, and four items. The origin is always a
//! clearing with a few useful items on the ground so a new game has
//! something to pick up. Everything else is rolled from the seed, so the
//! same seed always yields the same world.

use chrono::NaiveDateTime;
use dungeon_types::{CreatureTag, Direction, ItemTag, Name, Percentage, Point, SpellId};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::creature::Creature;
use crate::item::{BookComponent, FoodComponent, Item};
use crate::location::Location;
use crate::world_map::LocationGenerator;

/// Seconds an apple takes to rot away (three days).
const APPLE_PUTREFACTION_SECONDS: i64 = 3 * 24 * 3600;

/// Seconds needed to read the tome.
const TOME_READING_SECONDS: u64 = 600;

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// The items the preset world knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemPreset {
    /// A light weapon.
    Stick,
    /// Food that rots after a few days.
    Apple,
    /// A book that teaches the self-healing spell.
    Tome,
    /// A repairable clock.
    PocketWatch,
}

impl ItemPreset {
    /// Every preset, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Stick, Self::Apple, Self::Tome, Self::PocketWatch];

    /// Build a fresh item of this kind, created at `now`.
    pub fn make(self, now: NaiveDateTime) -> Item {
        match self {
            Self::Stick => Item::new(
                Name::regular("Stick"),
                5,
                20,
                Percentage::from_permille(800),
                now,
            )
            .with_weapon(4),
            Self::Apple => Item::new(
                Name::regular("Apple"),
                2,
                6,
                Percentage::from_permille(700),
                now,
            )
            .with_food(FoodComponent {
                nutrition: 8,
                integrity_decrement_on_eat: 3,
            })
            .with_decomposition(APPLE_PUTREFACTION_SECONDS),
            Self::Tome => Item::new(
                Name::regular("Tome"),
                10,
                10,
                Percentage::from_permille(800),
                now,
            )
            .with_book(BookComponent {
                text: String::from(
                    "The pages describe how to close your own wounds with a few whispered words.",
                ),
                spell: Some(SpellId::new("HEAL_SELF")),
                time_to_read: TOME_READING_SECONDS,
            }),
            Self::PocketWatch => Item::new(
                Name::new("Pocket Watch", "Pocket Watches"),
                1,
                4,
                Percentage::from_permille(400),
                now,
            )
            .with_clock()
            .with_tag(ItemTag::Repairable),
        }
    }
}

/// The creatures the preset world knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CreaturePreset {
    /// Small and hard to spot.
    Rat,
    /// Nearly invisible in the dark.
    Bat,
    /// Big, docile, and milkable.
    Cow,
    /// Dangerous.
    Wolf,
}

impl CreaturePreset {
    /// Every preset, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Rat, Self::Bat, Self::Cow, Self::Wolf];

    /// Build a fresh creature of this kind.
    pub fn make(self) -> Creature {
        match self {
            Self::Rat => Creature::new(Name::regular("Rat"), 8, 2, Percentage::from_permille(500)),
            Self::Bat => Creature::new(Name::regular("Bat"), 4, 1, Percentage::from_permille(300)),
            Self::Cow => Creature::new(Name::regular("Cow"), 40, 3, Percentage::from_permille(900))
                .with_tag(CreatureTag::Milkable)
                .with_tag(CreatureTag::Docile),
            Self::Wolf => Creature::new(
                Name::new("Wolf", "Wolves"),
                30,
                8,
                Percentage::from_permille(700),
            ),
        }
    }
}

/// Terrain kinds used by the preset generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Terrain {
    /// Open grassland, fully lit.
    Meadow,
    /// Trees filter a good part of the light.
    Forest,
    /// A gap in the forest.
    Clearing,
    /// Almost no light; the way north is rock.
    Cave,
}

impl Terrain {
    /// Every terrain kind, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Meadow, Self::Forest, Self::Clearing, Self::Cave];

    /// Build an empty location of this kind.
    pub fn make(self) -> Location {
        match self {
            Self::Meadow => Location::new(
                Name::regular("Meadow"),
                "Tall grass bends in the wind.",
                Percentage::ONE,
            ),
            Self::Forest => Location::new(
                Name::regular("Forest"),
                "Thick trees hide most of the sky.",
                Percentage::from_permille(600),
            ),
            Self::Clearing => Location::new(
                Name::regular("Clearing"),
                "A small open patch of soft ground surrounded by trees.",
                Percentage::from_permille(900),
            ),
            Self::Cave => {
                let mut cave = Location::new(
                    Name::regular("Cave"),
                    "Damp rock walls close in around you.",
                    Percentage::from_permille(100),
                );
                cave.blocked.insert(Direction::North);
                cave
            }
        }
    }

    /// Chance, in thousandths, that a creature of `preset` lives here.
    const fn creature_chance(self, preset: CreaturePreset) -> u32 {
        match (self, preset) {
            (Self::Cave, CreaturePreset::Bat) => 700,
            (Self::Cave | Self::Forest, CreaturePreset::Rat) => 400,
            (Self::Meadow, CreaturePreset::Cow) => 500,
            (Self::Forest, CreaturePreset::Wolf) => 250,
            (Self::Clearing, CreaturePreset::Rat | CreaturePreset::Cow) => 150,
            _ => 0,
        }
    }

    /// Chance, in thousandths, that an item of `preset` lies here.
    const fn item_chance(self, preset: ItemPreset) -> u32 {
        match (self, preset) {
            (Self::Forest | Self::Clearing, ItemPreset::Stick) => 500,
            (Self::Meadow | Self::Clearing, ItemPreset::Apple) => 400,
            (Self::Cave, ItemPreset::Tome) => 100,
            (Self::Cave, ItemPreset::PocketWatch) => 50,
            _ => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Seeded generator for the preset world.
#[derive(Debug, Clone)]
pub struct PresetGenerator {
    /// Source of every random roll.
    rng: SmallRng,
}

impl PresetGenerator {
    /// A generator whose output depends only on `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The fixed starting clearing at the origin.
    fn origin(now: NaiveDateTime) -> Location {
        let mut clearing = Terrain::Clearing.make();
        for preset in [ItemPreset::Stick, ItemPreset::Apple, ItemPreset::PocketWatch] {
            if let Err(error) = clearing.add_item(preset.make(now)) {
                warn!(%error, ?preset, "origin refused a preset item");
            }
        }
        clearing
    }

    /// Roll `chance` thousandths.
    fn roll(&mut self, chance: u32) -> bool {
        chance > 0 && self.rng.random_range(0..1000) < chance
    }
}

impl LocationGenerator for PresetGenerator {
    fn generate(&mut self, point: Point, now: NaiveDateTime) -> Location {
        if point == Point::default() {
            return Self::origin(now);
        }
        let index = self.rng.random_range(0..Terrain::ALL.len());
        let terrain = Terrain::ALL.get(index).copied().unwrap_or(Terrain::Meadow);
        let mut location = terrain.make();
        for preset in CreaturePreset::ALL {
            if self.roll(terrain.creature_chance(preset)) {
                let count = self.rng.random_range(1..=2);
                for _ in 0..count {
                    location.add_creature(preset.make());
                }
            }
        }
        for preset in ItemPreset::ALL {
            if self.roll(terrain.item_chance(preset))
                && let Err(error) = location.add_item(preset.make(now))
            {
                warn!(%error, ?preset, "location refused a preset item");
            }
        }
        location
    }
}
