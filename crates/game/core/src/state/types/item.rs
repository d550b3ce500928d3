//! Pickups lying on the floor.

use super::Position;

/// Effect family of a pickup.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    /// Restores hit points up to the maximum.
    Heal,
    /// Permanently raises the attack bonus.
    Power,
    /// Grants two-cell moves for a number of turns.
    Dash,
}

/// An item on the ground. At most one item occupies a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub position: Position,
    pub kind: ItemKind,
}

impl ItemState {
    pub fn new(position: Position, kind: ItemKind) -> Self {
        Self { position, kind }
    }
}
