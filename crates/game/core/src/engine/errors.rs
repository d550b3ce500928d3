//! Errors surfaced by the turn engine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Phase;

/// A command the engine refused. The state is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("the game ended on turn {turn}; no further commands are accepted")]
    GameOver { turn: u32 },

    #[error("engine entered with phase {0}; expected awaiting_command")]
    UnexpectedPhase(Phase),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::GameOver { .. } => ErrorSeverity::Contract,
            TurnError::UnexpectedPhase(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::GameOver { .. } => "TURN_GAME_OVER",
            TurnError::UnexpectedPhase(_) => "TURN_UNEXPECTED_PHASE",
        }
    }
}
