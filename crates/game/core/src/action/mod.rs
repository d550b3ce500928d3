//! Player commands and their resolution.
//!
//! A [`Command`] is the only input the engine accepts. Resolution of the
//! player's half of a turn lives here; the engine wraps it with the enemy
//! phase and end-of-turn bookkeeping.

mod attack;
mod movement;

pub use attack::{StrikeReport, attack_player, strike};
pub use movement::{Direction, MoveOutcome, move_player};

use std::fmt;

/// Player input for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Move one cell (two while dashing), attacking whatever blocks the way.
    Move(Direction),
    /// Attack the lowest-id adjacent enemy.
    Attack,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(direction) => write!(f, "move {direction}"),
            Command::Attack => f.write_str("attack"),
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction)
    }
}
