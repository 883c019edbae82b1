//! What the hero can see.
//!
//! An entity with intrinsic visibility `v` is visible under luminosity `l`
//! when `l >= 1 - v`. A fully visible entity is seen even in total
//! darkness; an entity with zero visibility only in full daylight. The
//! observer always sees itself.
//!
//! Everything here is pure: no clock, no world, no randomness.

use dungeon_types::{CreatureId, Percentage};
use dungeon_world::{Creature, Item};

/// Intrinsic visibility of the surrounding locations as a whole.
pub const ADJACENT_LOCATIONS_VISIBILITY: Percentage = Percentage::from_permille(600);

/// Something that can be seen or missed.
pub trait Perceivable {
    /// Intrinsic visibility in `[0, 1]`.
    fn visibility(&self) -> Percentage;

    /// Whether this entity is the observer itself.
    fn is_observer(&self, _observer: CreatureId) -> bool {
        false
    }
}

impl Perceivable for Item {
    fn visibility(&self) -> Percentage {
        self.visibility
    }
}

impl Perceivable for Creature {
    fn visibility(&self) -> Percentage {
        self.visibility
    }

    fn is_observer(&self, observer: CreatureId) -> bool {
        self.id == observer
    }
}

/// Whether something with `visibility` can be seen under `luminosity`.
pub const fn visible_under(visibility: Percentage, luminosity: Percentage) -> bool {
    luminosity.permille() >= visibility.complement().permille()
}

/// Whether `observer` can perceive `entity` under `luminosity`.
pub fn is_visible<E: Perceivable + ?Sized>(
    observer: CreatureId,
    entity: &E,
    luminosity: Percentage,
) -> bool {
    entity.is_observer(observer) || visible_under(entity.visibility(), luminosity)
}

/// Whether the neighbouring locations can be made out under `luminosity`.
pub const fn can_see_adjacent(luminosity: Percentage) -> bool {
    visible_under(ADJACENT_LOCATIONS_VISIBILITY, luminosity)
}

/// Keep the entities `observer` can see, in their original order.
pub fn filter_visible<'a, E, I>(entities: I, observer: CreatureId, luminosity: Percentage) -> Vec<&'a E>
where
    E: Perceivable + 'a,
    I: IntoIterator<Item = &'a E>,
{
    entities
        .into_iter()
        .filter(|entity| is_visible(observer, *entity, luminosity))
        .collect()
}
