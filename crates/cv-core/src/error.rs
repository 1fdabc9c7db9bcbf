//! Integrity errors for the world tables and state.

use crate::ids::{ItemId, LocationId};

/// Alias for `Result<T, CvError>`.
pub type CvResult<T> = Result<T, CvError>;

/// Errors raised by the world model.
#[derive(Debug, thiserror::Error)]
pub enum CvError {
    /// A room number that has no entry in the world.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// An item number that has no definition.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// An item was defined twice.
    #[error("item {0} is defined more than once")]
    DuplicateItem(ItemId),

    /// A travel edge leads to a room that does not exist.
    #[error("travel from {from} leads to unknown location {to}")]
    DanglingDestination {
        /// Room owning the edge.
        from: LocationId,
        /// The missing target.
        to: LocationId,
    },

    /// An item starts in a room that does not exist.
    #[error("item {item} starts in unknown location {location}")]
    DanglingPlacement {
        /// The misplaced item.
        item: ItemId,
        /// The missing room.
        location: LocationId,
    },

    /// An item is missing from its holder's chain or appears in several.
    #[error("item {0} is not held by exactly one holder")]
    OwnershipViolation(ItemId),
}
