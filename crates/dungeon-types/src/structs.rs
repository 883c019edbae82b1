//! Small value structs shared across the Dungeon workspace.
//!
//! - [`Name`] -- singular and plural display forms of an entity
//! - [`Percentage`] -- a fraction in `[0, 1]` stored as permille
//! - [`Point`] -- a coordinate on the world grid

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

// ---------------------------------------------------------------------------
// Name
// ---------------------------------------------------------------------------

/// The display name of an entity.
///
/// Equality compares both forms, which is what "distinct display names"
/// means during target selection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Name {
    /// Form used for a single entity ("Wolf").
    pub singular: String,
    /// Form used for several entities ("Wolves").
    pub plural: String,
}

impl Name {
    /// Build a name with an explicit plural form.
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Build a name whose plural is the singular followed by `s`.
    pub fn regular(singular: impl Into<String>) -> Self {
        let singular = singular.into();
        let plural = format!("{singular}s");
        Self { singular, plural }
    }

    /// The name preceded by a number, picking the right form.
    ///
    /// `quantified(1)` gives `"1 item"`, `quantified(3)` gives `"3 items"`.
    pub fn quantified(&self, count: u64) -> String {
        if count == 1 {
            format!("{count} {}", self.singular)
        } else {
            format!("{count} {}", self.plural)
        }
    }

    /// The form to use when referring to `count` entities, without the number.
    pub fn for_count(&self, count: u64) -> &str {
        if count == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.singular)
    }
}

// ---------------------------------------------------------------------------
// Percentage
// ---------------------------------------------------------------------------

/// A fraction in the closed range `[0, 1]`, stored in thousandths.
///
/// Integer storage keeps visibility comparisons exact: there is no float
/// rounding at the boundary between seen and unseen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u16);

impl Percentage {
    /// Nothing at all.
    pub const ZERO: Self = Self(0);
    /// All of it.
    pub const ONE: Self = Self(1000);

    /// Build a percentage from thousandths, clamping anything above 1000.
    pub const fn from_permille(permille: u16) -> Self {
        if permille > 1000 {
            Self(1000)
        } else {
            Self(permille)
        }
    }

    /// The value in thousandths (0--1000).
    pub const fn permille(self) -> u16 {
        self.0
    }

    /// `1 - self`.
    pub const fn complement(self) -> Self {
        Self(1000_u16.saturating_sub(self.0))
    }

    /// The product of two fractions, rounded down.
    pub fn multiply(self, other: Self) -> Self {
        let product = u32::from(self.0)
            .saturating_mul(u32::from(other.0))
            .checked_div(1000)
            .unwrap_or(0);
        Self::from_permille(u16::try_from(product).unwrap_or(1000))
    }

    /// Scale an integer by this fraction, rounding down.
    pub fn of(self, value: u32) -> u32 {
        let scaled = u64::from(value)
            .saturating_mul(u64::from(self.0))
            .checked_div(1000)
            .unwrap_or(0);
        u32::try_from(scaled).unwrap_or(value)
    }
}

impl core::fmt::Display for Percentage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let whole = self.0 / 10;
        let tenths = self.0 % 10;
        if tenths == 0 {
            write!(f, "{whole}%")
        } else {
            write!(f, "{whole}.{tenths}%")
        }
    }
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A coordinate on the unbounded world grid. The hero starts at `(0, 0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    /// West-east axis; grows to the east.
    pub x: i32,
    /// South-north axis; grows to the north.
    pub y: i32,
}

impl Point {
    /// Build a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point in `direction`, or `None` at the edge of `i32`.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{{},{}}}", self.x, self.y)
    }
}
