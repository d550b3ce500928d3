//! Unified error type surfaced by the session API.
//!
//! Wraps rule-level failures from `game-core` plus loading and snapshot
//! errors so clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ErrorSeverity, GameError, SpawnError, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The session could not be created.
    #[error(transparent)]
    Spawn(#[from] SpawnError),

    /// The engine refused a command.
    #[error(transparent)]
    Turn(#[from] TurnError),

    /// A configuration file could not be read or parsed.
    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("failed to serialize game state snapshot")]
    Snapshot(#[source] serde_json::Error),
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Spawn(err) => err.severity(),
            RuntimeError::Turn(err) => err.severity(),
            RuntimeError::Content(_) => ErrorSeverity::Configuration,
            RuntimeError::Snapshot(_) => ErrorSeverity::Internal,
        }
    }

    /// True when the session has ended and only a restart helps.
    pub fn is_game_over(&self) -> bool {
        matches!(self, RuntimeError::Turn(TurnError::GameOver { .. }))
    }
}
