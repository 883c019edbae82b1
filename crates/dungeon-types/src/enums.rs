//! Enumeration types for the Dungeon action core.
//!
//! Tags select which capability components and behaviors apply to items and
//! creatures. Parts of the day gate resting and sleeping and scale the light
//! that reaches each location. Directions connect adjacent locations.

use serde::{Deserialize, Serialize};

use crate::structs::Percentage;

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// A behavior flag attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemTag {
    /// Can be equipped and used in combat.
    Weapon,
    /// Can be eaten; the item carries a food component.
    Food,
    /// Shows the time; the item carries a clock component.
    Clock,
    /// Can be read; the item carries a book component.
    Book,
    /// Stays in play when broken instead of being removed.
    Repairable,
    /// Rots away once its putrefaction period elapses.
    Decomposes,
}

/// A behavior flag attached to a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreatureTag {
    /// The hero can drink milk from it.
    Milkable,
    /// Does not start fights on its own.
    Docile,
}

// ---------------------------------------------------------------------------
// Part of day
// ---------------------------------------------------------------------------

/// A named segment of the simulated day.
///
/// | Part      | Starts | Luminosity |
/// |-----------|--------|------------|
/// | Midnight  | 00:00  | 20%        |
/// | Night     | 01:00  | 30%        |
/// | Dawn      | 05:00  | 60%        |
/// | Morning   | 07:00  | 80%        |
/// | Noon      | 11:00  | 100%       |
/// | Afternoon | 13:00  | 80%        |
/// | Dusk      | 17:00  | 60%        |
/// | Evening   | 19:00  | 40%        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PartOfDay {
    /// The first hour after midnight.
    Midnight,
    /// Deep night, before the sky starts to brighten.
    Night,
    /// Sunrise.
    Dawn,
    /// Early day.
    Morning,
    /// Midday, the brightest part of the day.
    Noon,
    /// Late day.
    Afternoon,
    /// Sunset.
    Dusk,
    /// Dark hours before midnight.
    Evening,
}

impl PartOfDay {
    /// Every part of the day in chronological order, starting at midnight.
    pub const ALL: [Self; 8] = [
        Self::Midnight,
        Self::Night,
        Self::Dawn,
        Self::Morning,
        Self::Noon,
        Self::Afternoon,
        Self::Dusk,
        Self::Evening,
    ];

    /// Hour of the day (0--23) at which this part begins.
    pub const fn start_hour(self) -> u32 {
        match self {
            Self::Midnight => 0,
            Self::Night => 1,
            Self::Dawn => 5,
            Self::Morning => 7,
            Self::Noon => 11,
            Self::Afternoon => 13,
            Self::Dusk => 17,
            Self::Evening => 19,
        }
    }

    /// The part of the day that contains the given hour.
    ///
    /// Hours past 23 are treated as evening.
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            0 => Self::Midnight,
            1..=4 => Self::Night,
            5..=6 => Self::Dawn,
            7..=10 => Self::Morning,
            11..=12 => Self::Noon,
            13..=16 => Self::Afternoon,
            17..=18 => Self::Dusk,
            _ => Self::Evening,
        }
    }

    /// Fraction of daylight reaching an unobstructed location.
    pub const fn luminosity(self) -> Percentage {
        Percentage::from_permille(match self {
            Self::Midnight => 200,
            Self::Night => 300,
            Self::Dawn | Self::Dusk => 600,
            Self::Morning | Self::Afternoon => 800,
            Self::Noon => 1000,
            Self::Evening => 400,
        })
    }

    /// Whether the hero may go to sleep during this part of the day.
    pub const fn allows_sleep(self) -> bool {
        matches!(self, Self::Evening | Self::Midnight | Self::Night)
    }

    /// Lowercase human-readable name, as used in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Midnight => "midnight",
            Self::Night => "night",
            Self::Dawn => "dawn",
            Self::Morning => "morning",
            Self::Noon => "noon",
            Self::Afternoon => "afternoon",
            Self::Dusk => "dusk",
            Self::Evening => "evening",
        }
    }
}

impl core::fmt::Display for PartOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// One of the four directions connecting adjacent locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards positive `y`.
    North,
    /// Towards positive `x`.
    East,
    /// Towards negative `y`.
    South,
    /// Towards negative `x`.
    West,
}

impl Direction {
    /// All directions in clockwise order, starting at north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The `(dx, dy)` shift applied to a point when walking this way.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// The direction pointing back where this one came from.
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// All directions except `excluded`, in clockwise order.
    pub fn all_except(excluded: Option<Self>) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|dir| Some(*dir) != excluded)
            .collect()
    }

    /// Parse a direction from a command token (`"n"`, `"north"`, ...).
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "e" | "east" => Some(Self::East),
            "s" | "south" => Some(Self::South),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Lowercase human-readable name, as used in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

/// A coarse description of how hurt a creature is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthState {
    /// Full health.
    Uninjured,
    /// At least 75% of maximum health.
    BarelyInjured,
    /// At least 50% of maximum health.
    Injured,
    /// At least 25% of maximum health.
    BadlyInjured,
    /// Alive, below 25% of maximum health.
    NearDeath,
    /// No health left.
    Dead,
}

impl HealthState {
    /// Classify a health pool.
    ///
    /// A zero `maximum` is reported as [`HealthState::Dead`].
    pub fn classify(current: u32, maximum: u32) -> Self {
        if current == 0 || maximum == 0 {
            return Self::Dead;
        }
        if current >= maximum {
            return Self::Uninjured;
        }
        // current < maximum here, so the widened products cannot overflow u64.
        let scaled = u64::from(current).saturating_mul(4);
        let max = u64::from(maximum);
        if scaled >= max.saturating_mul(3) {
            Self::BarelyInjured
        } else if scaled >= max.saturating_mul(2) {
            Self::Injured
        } else if scaled >= max {
            Self::BadlyInjured
        } else {
            Self::NearDeath
        }
    }

    /// Lowercase human-readable name, as used in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninjured => "uninjured",
            Self::BarelyInjured => "barely injured",
            Self::Injured => "injured",
            Self::BadlyInjured => "badly injured",
            Self::NearDeath => "near death",
            Self::Dead => "dead",
        }
    }
}

impl core::fmt::Display for HealthState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
