//! Items and their optional capability components.
//!
//! An [`Item`] is a plain entity (name, visibility, weight) plus an
//! [`Integrity`] counter, a tag set, and zero or more capability components.
//! Behaviors dispatch on the presence of a component: an item can be eaten
//! only if it has a [`FoodComponent`], read only with a [`BookComponent`],
//! and so on.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use dungeon_types::{ItemId, ItemTag, Name, Percentage, SpellId};
use serde::{Deserialize, Serialize};

/// Time format used by clock faces.
const CLOCK_FACE_FORMAT: &str = "%H:%M:%S";

// ---------------------------------------------------------------------------
// Integrity
// ---------------------------------------------------------------------------

/// How worn an item is. Zero means broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integrity {
    /// Remaining integrity points.
    pub current: u32,
    /// Integrity of a brand new item.
    pub maximum: u32,
}

impl Integrity {
    /// A fully intact integrity counter.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Whether no integrity is left.
    pub const fn is_broken(self) -> bool {
        self.current == 0
    }

    /// Subtract `amount` points, stopping at zero.
    pub const fn decrement_by(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Drop to zero.
    pub const fn decrement_to_zero(&mut self) {
        self.current = 0;
    }

    /// Classify the counter for display.
    pub fn state(self) -> IntegrityState {
        if self.current == 0 {
            return IntegrityState::Broken;
        }
        if self.current >= self.maximum {
            return IntegrityState::Perfect;
        }
        let scaled = u64::from(self.current).saturating_mul(3);
        let max = u64::from(self.maximum);
        if scaled >= max.saturating_mul(2) {
            IntegrityState::SlightlyDamaged
        } else if scaled >= max {
            IntegrityState::Damaged
        } else {
            IntegrityState::SeverelyDamaged
        }
    }
}

/// Coarse integrity buckets used to qualify item names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntegrityState {
    /// Untouched.
    Perfect,
    /// At least two thirds left.
    SlightlyDamaged,
    /// At least one third left.
    Damaged,
    /// Less than a third left.
    SeverelyDamaged,
    /// Nothing left.
    Broken,
}

impl IntegrityState {
    /// Adjective placed before the item name, empty for perfect items.
    pub const fn adjective(self) -> &'static str {
        match self {
            Self::Perfect => "",
            Self::SlightlyDamaged => "Slightly Damaged",
            Self::Damaged => "Damaged",
            Self::SeverelyDamaged => "Severely Damaged",
            Self::Broken => "Broken",
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Makes an item edible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodComponent {
    /// Health restored by one full bite.
    pub nutrition: u32,
    /// Integrity consumed by one bite.
    pub integrity_decrement_on_eat: u32,
}

/// Makes an item readable, and optionally teaches a spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookComponent {
    /// What the hero reads.
    pub text: String,
    /// Spell learned by reading this book, if any.
    pub spell: Option<SpellId>,
    /// Seconds needed to read the whole text.
    pub time_to_read: u64,
}

impl BookComponent {
    /// Whether reading this book teaches a spell.
    pub const fn is_didactic(&self) -> bool {
        self.spell.is_some()
    }
}

/// Lets an item show the time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockComponent {
    /// The time shown by the hands once the clock broke.
    pub stopped_at: Option<NaiveDateTime>,
}

/// Lets an item be wielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponComponent {
    /// Damage added to the wielder's base attack.
    pub damage: u32,
}

/// Limits how long an item lasts before rotting away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionComponent {
    /// Seconds after creation at which the item is gone.
    pub putrefaction_seconds: i64,
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A placeable object that can sit on the ground or in an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: Name,
    /// How easy it is to notice, in `[0, 1]`.
    pub visibility: Percentage,
    /// Weight counted against inventory limits.
    pub weight: u32,
    /// Wear counter.
    pub integrity: Integrity,
    /// Behavior flags.
    pub tags: BTreeSet<ItemTag>,
    /// World time at which the item came into existence.
    pub created_at: NaiveDateTime,
    /// Edible capability.
    pub food: Option<FoodComponent>,
    /// Readable capability.
    pub book: Option<BookComponent>,
    /// Time-telling capability.
    pub clock: Option<ClockComponent>,
    /// Wieldable capability.
    pub weapon: Option<WeaponComponent>,
    /// Rotting capability.
    pub decomposition: Option<DecompositionComponent>,
}

impl Item {
    /// A plain tagless item with full integrity and no components.
    pub fn new(
        name: Name,
        weight: u32,
        max_integrity: u32,
        visibility: Percentage,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name,
            visibility,
            weight,
            integrity: Integrity::full(max_integrity),
            tags: BTreeSet::new(),
            created_at,
            food: None,
            book: None,
            clock: None,
            weapon: None,
            decomposition: None,
        }
    }

    /// Add a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: ItemTag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Attach a food component and the `FOOD` tag.
    #[must_use]
    pub fn with_food(mut self, food: FoodComponent) -> Self {
        self.food = Some(food);
        self.with_tag(ItemTag::Food)
    }

    /// Attach a book component and the `BOOK` tag.
    #[must_use]
    pub fn with_book(mut self, book: BookComponent) -> Self {
        self.book = Some(book);
        self.with_tag(ItemTag::Book)
    }

    /// Attach a clock component and the `CLOCK` tag.
    #[must_use]
    pub fn with_clock(mut self) -> Self {
        self.clock = Some(ClockComponent::default());
        self.with_tag(ItemTag::Clock)
    }

    /// Attach a weapon component and the `WEAPON` tag.
    #[must_use]
    pub fn with_weapon(mut self, damage: u32) -> Self {
        self.weapon = Some(WeaponComponent { damage });
        self.with_tag(ItemTag::Weapon)
    }

    /// Attach a decomposition component and the `DECOMPOSES` tag.
    #[must_use]
    pub fn with_decomposition(mut self, putrefaction_seconds: i64) -> Self {
        self.decomposition = Some(DecompositionComponent {
            putrefaction_seconds,
        });
        self.with_tag(ItemTag::Decomposes)
    }

    /// Whether the item carries `tag`.
    pub fn has_tag(&self, tag: ItemTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Whether no integrity is left.
    pub const fn is_broken(&self) -> bool {
        self.integrity.is_broken()
    }

    /// A broken item that cannot be repaired leaves play.
    pub fn should_be_removed(&self) -> bool {
        self.is_broken() && !self.has_tag(ItemTag::Repairable)
    }

    /// The singular name prefixed by its integrity adjective, if any.
    ///
    /// `"Stick"` when intact, `"Damaged Stick"` when worn.
    pub fn qualified_name(&self) -> String {
        let adjective = self.integrity.state().adjective();
        if adjective.is_empty() {
            self.name.singular.clone()
        } else {
            format!("{adjective} {}", self.name.singular)
        }
    }

    /// Take one bite: subtract the food decrement from integrity.
    ///
    /// Items without a food component are left untouched.
    pub fn decrement_integrity_by_eat(&mut self) {
        if let Some(food) = self.food {
            self.integrity.decrement_by(food.integrity_decrement_on_eat);
        }
    }

    /// Break the item at `now`, freezing any clock face at that instant.
    pub fn decrement_integrity_to_zero(&mut self, now: NaiveDateTime) {
        self.integrity.decrement_to_zero();
        if let Some(clock) = self.clock.as_mut() {
            clock.stopped_at.get_or_insert(now);
        }
    }

    /// Whether the putrefaction period has elapsed at `now`.
    pub fn is_decomposed(&self, now: NaiveDateTime) -> bool {
        if !self.has_tag(ItemTag::Decomposes) {
            return false;
        }
        self.decomposition.is_some_and(|component| {
            now.signed_duration_since(self.created_at).num_seconds()
                >= component.putrefaction_seconds
        })
    }

    /// What the clock face shows at `now`, or `None` if this is not a clock.
    pub fn clock_reading(&self, now: NaiveDateTime) -> Option<String> {
        let clock = self.clock?;
        if self.is_broken() {
            let stuck = clock.stopped_at.unwrap_or(self.created_at);
            Some(format!(
                "The clock is broken. Its hands are stuck at {}.",
                stuck.format(CLOCK_FACE_FORMAT)
            ))
        } else {
            Some(format!(
                "The clock displays {}.",
                now.format(CLOCK_FACE_FORMAT)
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2055, 6, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn make_item(max_integrity: u32) -> Item {
        Item::new(
            Name::regular("Stick"),
            5,
            max_integrity,
            Percentage::ONE,
            noon(),
        )
    }

    #[test]
    fn qualified_name_reflects_integrity() {
        let mut item = make_item(9);
        assert_eq!(item.qualified_name(), "Stick");
        item.integrity.decrement_by(2);
        assert_eq!(item.qualified_name(), "Slightly Damaged Stick");
        item.integrity.decrement_by(3);
        assert_eq!(item.qualified_name(), "Damaged Stick");
        item.integrity.decrement_by(2);
        assert_eq!(item.qualified_name(), "Severely Damaged Stick");
        item.integrity.decrement_by(100);
        assert_eq!(item.qualified_name(), "Broken Stick");
    }

    #[test]
    fn broken_repairable_items_stay() {
        let mut item = make_item(1).with_tag(ItemTag::Repairable);
        item.integrity.decrement_to_zero();
        assert!(item.is_broken());
        assert!(!item.should_be_removed());

        let mut plain = make_item(1);
        plain.integrity.decrement_to_zero();
        assert!(plain.should_be_removed());
    }

    #[test]
    fn eating_uses_food_decrement() {
        let mut apple = make_item(4).with_food(FoodComponent {
            nutrition: 10,
            integrity_decrement_on_eat: 3,
        });
        assert!(apple.has_tag(ItemTag::Food));
        apple.decrement_integrity_by_eat();
        assert_eq!(apple.integrity.current, 1);
        apple.decrement_integrity_by_eat();
        assert!(apple.is_broken());
    }

    #[test]
    fn decomposition_is_time_based() {
        let apple = make_item(1).with_decomposition(60);
        assert!(!apple.is_decomposed(noon()));
        let later = noon().checked_add_signed(chrono::TimeDelta::seconds(60)).unwrap();
        assert!(apple.is_decomposed(later));
        assert!(!make_item(1).is_decomposed(later));
    }

    #[test]
    fn broken_clock_freezes_at_break_time() {
        let mut watch = make_item(1).with_clock();
        let later = noon().checked_add_signed(chrono::TimeDelta::hours(2)).unwrap();
        assert_eq!(
            watch.clock_reading(later).as_deref(),
            Some("The clock displays 14:00:00.")
        );
        watch.decrement_integrity_to_zero(later);
        let much_later = later.checked_add_signed(chrono::TimeDelta::hours(5)).unwrap();
        assert_eq!(
            watch.clock_reading(much_later).as_deref(),
            Some("The clock is broken. Its hands are stuck at 14:00:00.")
        );
        assert_eq!(make_item(1).clock_reading(noon()), None);
    }

    #[test]
    fn item_serializes_with_tags() {
        let stick = make_item(1).with_weapon(4);
        let json = serde_json::to_string(&stick).unwrap();
        assert!(json.contains("\"WEAPON\""));
        let restored: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, stick);
    }
}
