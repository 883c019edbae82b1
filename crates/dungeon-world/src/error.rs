//! Error types for the `dungeon-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`]. None of these
//! are user mistakes: a player typing a bad name gets a report line, never a
//! `WorldError`. These signal broken invariants in the calling code.

use dungeon_types::{CreatureId, Direction, ItemId, Point};

/// Errors that can occur while mutating world containers.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// An item was added to a container that already holds its maximum count.
    #[error("adding item {item} would exceed the item limit of {limit}")]
    AmountLimitExceeded {
        /// The rejected item.
        item: ItemId,
        /// The container's item limit.
        limit: u32,
    },

    /// An item was added to a container that cannot bear its weight.
    #[error("adding item {item} ({weight}) would exceed the weight limit of {limit}")]
    WeightLimitExceeded {
        /// The rejected item.
        item: ItemId,
        /// Weight of the rejected item.
        weight: u32,
        /// The container's weight limit.
        limit: u64,
    },

    /// An item was inserted twice into the same container.
    #[error("item {0} is already in this container")]
    DuplicateItem(ItemId),

    /// The item is not in the container it was expected in.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// The creature is not at the location it was expected at.
    #[error("creature not found: {0}")]
    CreatureNotFound(CreatureId),

    /// Walking off the representable grid.
    #[error("no point {direction} of {from}")]
    EdgeOfWorld {
        /// Where the step started.
        from: Point,
        /// The attempted direction.
        direction: Direction,
    },

    /// Arithmetic overflow during a checked operation.
    #[error("arithmetic overflow in world calculation")]
    ArithmeticOverflow,
}
