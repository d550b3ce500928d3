use std::fmt;

/// Stage of the turn state machine.
///
/// Between commands the state is always [`Phase::AwaitingCommand`] or
/// [`Phase::GameOver`]; the intermediate phases are only observable while a
/// command is being resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    AwaitingCommand,
    ResolvingPlayerAction,
    ResolvingEnemyPhase,
    EndOfTurn,
    /// Terminal: the player has been defeated.
    GameOver,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Turn bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Starts at 1 and advances once per completed turn.
    pub turn_number: u32,
    pub phase: Phase,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            turn_number: 1,
            phase: Phase::AwaitingCommand,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
