//! Placement errors.
//!
//! Raised when an entity is put on a cell that cannot hold it. Spawning
//! only picks free floor cells, so these surface from hand-built states.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Position is outside the map bounds.
    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),

    /// Position is a wall.
    #[error("position {0} is not a floor cell")]
    NotFloor(Position),

    /// Position already holds the player, an enemy, or an item.
    #[error("position {0} is already occupied")]
    Occupied(Position),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Contract
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds(_) => "STATE_OUT_OF_BOUNDS",
            Self::NotFloor(_) => "STATE_NOT_FLOOR",
            Self::Occupied(_) => "STATE_OCCUPIED",
        }
    }
}
