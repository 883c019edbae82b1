//! Error type for hero actions.
//!
//! A player typing something impossible gets a report line, not an error.
//! [`ActionError`] is reserved for broken invariants: the clock refusing
//! to move, a container refusing an item that was checked to fit, the
//! hero standing on a location that was never generated.

use dungeon_types::{Point, SpellId};

/// Errors that abort an action.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: crate::clock::ClockError,
    },

    /// A world container operation failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: dungeon_world::WorldError,
    },

    /// The hero stands on a point with no loaded location.
    #[error("no location loaded at {0}")]
    MissingLocation(Point),

    /// A book teaches a spell that is not in the registry.
    #[error("unknown spell: {0}")]
    UnknownSpell(SpellId),

    /// Another caller panicked while holding the game lock.
    #[error("game state lock poisoned")]
    Poisoned,
}
