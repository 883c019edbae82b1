//! The only way simulated time moves.
//!
//! [`TimeGate::advance`] moves the [`WorldClock`] and then refreshes the
//! world: every loaded location and the hero's inventory lose the items
//! that rotted away or broke beyond repair. Anything an action resolved
//! before calling the gate may therefore be gone afterwards, which is why
//! actions re-validate their targets after paying the time cost.

use chrono::NaiveDateTime;
use dungeon_types::PartOfDay;
use dungeon_world::WorldMap;
use tracing::debug;

use crate::clock::{ClockError, WorldClock};
use crate::hero::Hero;

/// Owner of the world clock.
#[derive(Debug, Clone)]
pub struct TimeGate {
    /// The world clock.
    clock: WorldClock,
    /// How many successful advances have happened.
    advancements: u64,
}

impl TimeGate {
    /// A gate over a clock reading `start`.
    pub const fn new(start: NaiveDateTime) -> Self {
        Self {
            clock: WorldClock::new(start),
            advancements: 0,
        }
    }

    /// Read-only view of the clock.
    pub const fn clock(&self) -> &WorldClock {
        &self.clock
    }

    /// Current world time.
    pub const fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Current part of the day.
    pub fn part_of_day(&self) -> PartOfDay {
        self.clock.part_of_day()
    }

    /// Number of successful advances so far.
    pub const fn advancements(&self) -> u64 {
        self.advancements
    }

    /// Advance by `seconds` (at least one) and refresh the world.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::ZeroDuration`] for a zero advance and
    /// [`ClockError::Overflow`] past the end of representable time. The
    /// world is not refreshed when the clock does not move.
    pub fn advance(
        &mut self,
        seconds: u64,
        world: &mut WorldMap,
        hero: &mut Hero,
    ) -> Result<NaiveDateTime, ClockError> {
        let now = self.clock.advance(seconds)?;
        self.advancements = self.advancements.saturating_add(1);
        debug!(seconds, %now, "clock advanced");
        refresh(now, world, hero);
        Ok(now)
    }
}

/// Remove expired items everywhere the world is loaded.
fn refresh(now: NaiveDateTime, world: &mut WorldMap, hero: &mut Hero) {
    for (_, location) in world.loaded_mut() {
        location.remove_expired_items(now);
    }
    let removed = hero.remove_items_where(|item| item.is_decomposed(now) || item.should_be_removed());
    for item in &removed {
        debug!(item = %item.id, name = %item.name, "item left the hero's inventory");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use dungeon_types::{Name, Percentage, Point};
    use dungeon_world::{Item, Location, LocationGenerator};

    use super::*;
    use crate::config::HeroConfig;

    struct EmptyGenerator;

    impl LocationGenerator for EmptyGenerator {
        fn generate(&mut self, _point: Point, _now: NaiveDateTime) -> Location {
            Location::new(Name::regular("Void"), "Nothing.", Percentage::ONE)
        }
    }

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2055, 6, 2)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
    }

    fn apple(putrefaction: i64) -> Item {
        Item::new(Name::regular("Apple"), 1, 1, Percentage::ONE, start())
            .with_decomposition(putrefaction)
    }

    #[test]
    fn clock_is_exactly_advanced_each_call() {
        let mut gate = TimeGate::new(start());
        let mut world = WorldMap::new(Box::new(EmptyGenerator));
        let mut hero = Hero::new(&HeroConfig::default());
        let mut previous = gate.now();
        for seconds in [1_u64, 10, 3600, 7] {
            let now = gate.advance(seconds, &mut world, &mut hero).unwrap();
            let elapsed = now.signed_duration_since(previous).num_seconds();
            assert_eq!(u64::try_from(elapsed).ok(), Some(seconds));
            previous = now;
        }
        assert_eq!(gate.advancements(), 4);
    }

    #[test]
    fn zero_advance_changes_nothing() {
        let mut gate = TimeGate::new(start());
        let mut world = WorldMap::new(Box::new(EmptyGenerator));
        let mut hero = Hero::new(&HeroConfig::default());
        assert!(gate.advance(0, &mut world, &mut hero).is_err());
        assert_eq!(gate.now(), start());
        assert_eq!(gate.advancements(), 0);
    }

    #[test]
    fn refresh_removes_rotten_items_everywhere() {
        let mut gate = TimeGate::new(start());
        let mut world = WorldMap::new(Box::new(EmptyGenerator));
        let mut hero = Hero::new(&HeroConfig::default());
        world.ensure_loaded(Point::default(), start()).add_item(apple(60)).unwrap();
        let carried = apple(60);
        let carried_id = carried.id;
        hero.add_item(carried).unwrap();
        hero.set_weapon(carried_id).unwrap();

        gate.advance(59, &mut world, &mut hero).unwrap();
        assert_eq!(hero.inventory.item_count(), 1);

        gate.advance(1, &mut world, &mut hero).unwrap();
        assert!(hero.inventory.is_empty());
        assert_eq!(hero.weapon(), None);
        assert!(world.get(Point::default()).is_some_and(|l| l.inventory.is_empty()));
    }
}
