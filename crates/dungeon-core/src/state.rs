//! The explicit game context threaded through every action.
//!
//! [`GameState`] bundles the hero, the world map, the time gate, the spell
//! registry, the name matcher, and the seeded random source. Nothing lives
//! in globals; an action receives `&mut GameState` and that is all it can
//! touch.
//!
//! [`SharedGame`] serializes whole commands behind one mutex for callers
//! that share a game across threads.

use std::sync::Mutex;

use chrono::NaiveDateTime;
use dungeon_types::{PartOfDay, Percentage, Point};
use dungeon_world::{Location, LocationGenerator, PresetGenerator, WorldMap};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::actions::{self, Verb};
use crate::combat::CombatResolver;
use crate::config::GameConfig;
use crate::error::ActionError;
use crate::gate::TimeGate;
use crate::hero::Hero;
use crate::matcher::{NameMatcher, PrefixMatcher};
use crate::report::ReportSink;
use crate::spells::SpellRegistry;

/// Everything an action can read or change.
pub struct GameState {
    /// The player-controlled creature.
    pub hero: Hero,
    /// Loaded locations and their generator.
    pub world: WorldMap,
    /// Owner of the world clock.
    pub gate: TimeGate,
    /// Learnable spells.
    pub spells: SpellRegistry,
    /// Name-match primitive used for every selection.
    pub matcher: Box<dyn NameMatcher + Send>,
    /// Source of sleep jitter and dream choice.
    rng: SmallRng,
    /// Dream library.
    dreams: Vec<String>,
    /// Wall-clock milliseconds per simulated hour of sleep.
    sleep_ms_per_hour: u64,
}

impl core::fmt::Debug for GameState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameState")
            .field("hero", &self.hero)
            .field("world", &self.world)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

impl GameState {
    /// A new game using the preset world generator seeded from the config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config, Box::new(PresetGenerator::new(config.world.seed)))
    }

    /// A new game whose locations come from `generator`.
    ///
    /// The hero starts at the origin, which is generated immediately.
    pub fn new(config: &GameConfig, generator: Box<dyn LocationGenerator>) -> Self {
        let start = config.world.start_date;
        let mut world = WorldMap::new(generator);
        let hero = Hero::new(&config.hero);
        world.ensure_loaded(hero.position, start);
        Self {
            hero,
            world,
            gate: TimeGate::new(start),
            spells: SpellRegistry::default(),
            matcher: Box::new(PrefixMatcher),
            rng: SmallRng::seed_from_u64(config.world.seed),
            dreams: config.dreams.clone(),
            sleep_ms_per_hour: config.timing.sleep_ms_per_hour,
        }
    }

    // -------------------------------------------------------------------
    // Time
    // -------------------------------------------------------------------

    /// Current world time.
    pub const fn now(&self) -> NaiveDateTime {
        self.gate.now()
    }

    /// Current part of the day.
    pub fn part_of_day(&self) -> PartOfDay {
        self.gate.part_of_day()
    }

    /// Advance the clock through the gate and refresh the world.
    ///
    /// # Errors
    ///
    /// Propagates [`ClockError`](crate::clock::ClockError) as
    /// [`ActionError::Clock`].
    pub fn advance_time(&mut self, seconds: u64) -> Result<NaiveDateTime, ActionError> {
        Ok(self.gate.advance(seconds, &mut self.world, &mut self.hero)?)
    }

    // -------------------------------------------------------------------
    // Surroundings
    // -------------------------------------------------------------------

    /// The location the hero stands on.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingLocation`] if it was never generated.
    pub fn hero_location(&self) -> Result<&Location, ActionError> {
        let position = self.hero.position;
        self.world
            .get(position)
            .ok_or(ActionError::MissingLocation(position))
    }

    /// Mutable access to the location the hero stands on.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingLocation`] if it was never generated.
    pub fn hero_location_mut(&mut self) -> Result<&mut Location, ActionError> {
        let position = self.hero.position;
        self.world
            .get_mut(position)
            .ok_or(ActionError::MissingLocation(position))
    }

    /// Light on the hero's location right now.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingLocation`] if it was never generated.
    pub fn luminosity(&self) -> Result<Percentage, ActionError> {
        Ok(self.hero_location()?.luminosity(self.part_of_day()))
    }

    /// Move the hero to `point`, generating it if needed.
    pub fn relocate_hero(&mut self, point: Point) {
        let now = self.now();
        self.world.ensure_loaded(point, now);
        self.hero.position = point;
    }

    // -------------------------------------------------------------------
    // Sleep support
    // -------------------------------------------------------------------

    /// Uniform random number of seconds in `0..=max`.
    pub fn jitter_seconds(&mut self, max: u64) -> u64 {
        self.rng.random_range(0..=max)
    }

    /// A random dream from the library, if there is any.
    pub fn next_dream(&mut self) -> Option<String> {
        if self.dreams.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.dreams.len());
        self.dreams.get(index).cloned()
    }

    /// Wall-clock milliseconds spent per simulated hour of sleep.
    pub const fn sleep_ms_per_hour(&self) -> u64 {
        self.sleep_ms_per_hour
    }
}

/// A game shared between callers. Each command runs under one lock.
#[derive(Debug)]
pub struct SharedGame {
    /// The game, guarded as a whole.
    inner: Mutex<GameState>,
}

impl SharedGame {
    /// Wrap a game.
    pub const fn new(state: GameState) -> Self {
        Self {
            inner: Mutex::new(state),
        }
    }

    /// Run `f` with exclusive access to the game.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Poisoned`] if a previous holder panicked.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> Result<R, ActionError> {
        let mut guard = self.inner.lock().map_err(|poison| {
            warn!(error = %poison, "game state lock poisoned");
            ActionError::Poisoned
        })?;
        Ok(f(&mut guard))
    }

    /// Run one full command under a single lock acquisition.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Poisoned`] if the lock is poisoned, or any
    /// error the action itself returns.
    pub fn execute(
        &self,
        verb: Verb,
        tokens: &[&str],
        combat: &mut dyn CombatResolver,
        sink: &mut dyn ReportSink,
    ) -> Result<(), ActionError> {
        self.with_state(|state| actions::execute(state, verb, tokens, combat, sink))?
    }
}
