//! The world grid: locations keyed by [`Point`], generated on first visit.
//!
//! The [`WorldMap`] owns every location that has been loaded so far and a
//! [`LocationGenerator`] that supplies new ones. Asking for an unseen point
//! generates and stores it, so the map only ever grows.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use dungeon_types::{Direction, Point};
use tracing::debug;

use crate::error::WorldError;
use crate::location::Location;

/// Supplies the location found at a coordinate.
///
/// Called once per point, the first time anything needs to know what is
/// there. `now` is the world time, used to date the items placed inside.
pub trait LocationGenerator: Send {
    /// Build the location at `point`.
    fn generate(&mut self, point: Point, now: NaiveDateTime) -> Location;
}

/// The loaded part of the world and the generator for the rest.
pub struct WorldMap {
    /// Every location generated so far.
    locations: BTreeMap<Point, Location>,
    /// Source of locations for unseen points.
    generator: Box<dyn LocationGenerator>,
}

impl core::fmt::Debug for WorldMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WorldMap")
            .field("loaded", &self.locations.len())
            .finish_non_exhaustive()
    }
}

impl WorldMap {
    /// An empty map backed by `generator`.
    pub fn new(generator: Box<dyn LocationGenerator>) -> Self {
        Self {
            locations: BTreeMap::new(),
            generator,
        }
    }

    /// Make sure the location at `point` exists, generating it if needed.
    pub fn ensure_loaded(&mut self, point: Point, now: NaiveDateTime) -> &mut Location {
        let generator = &mut self.generator;
        self.locations.entry(point).or_insert_with(|| {
            let location = generator.generate(point, now);
            debug!(%point, name = %location.name, "generated location");
            location
        })
    }

    /// Make sure every neighbour of `point` exists.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EdgeOfWorld`] at the edge of the grid.
    pub fn ensure_neighbours_loaded(
        &mut self,
        point: Point,
        now: NaiveDateTime,
    ) -> Result<(), WorldError> {
        for direction in Direction::ALL {
            let neighbour = point
                .step(direction)
                .ok_or(WorldError::EdgeOfWorld { from: point, direction })?;
            self.ensure_loaded(neighbour, now);
        }
        Ok(())
    }

    /// Borrow a loaded location.
    pub fn get(&self, point: Point) -> Option<&Location> {
        self.locations.get(&point)
    }

    /// Mutably borrow a loaded location.
    pub fn get_mut(&mut self, point: Point) -> Option<&mut Location> {
        self.locations.get_mut(&point)
    }

    /// Number of loaded locations.
    pub fn loaded_count(&self) -> usize {
        self.locations.len()
    }

    /// Iterate over loaded locations mutably.
    pub fn loaded_mut(&mut self) -> impl Iterator<Item = (&Point, &mut Location)> {
        self.locations.iter_mut()
    }
}
