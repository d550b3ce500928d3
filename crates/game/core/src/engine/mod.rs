//! Turn state machine.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. One
//! call to [`GameEngine::execute`] resolves one complete turn:
//!
//! ```text
//! AwaitingCommand → ResolvingPlayerAction → ResolvingEnemyPhase → EndOfTurn
//!        ↑                     │ (no-op)                            │
//!        └─────────────────────┴────────────────────────────────────┤
//!                                                                   ↓
//!                                                               GameOver
//! ```
//!
//! A command that neither moves nor attacks skips the enemy phase and does
//! not advance the turn number.

mod errors;
mod turns;

pub use errors::TurnError;

use crate::action::{self, Command};
use crate::ai::EnemyAction;
use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::{EntityId, GameEvent, GameState, Phase};

/// Summary of one executed command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Whether the command consumed a turn (and ran the enemy phase).
    pub acted: bool,
    /// Turn number after the command.
    pub turn_number: u32,
    /// Phase after the command: `AwaitingCommand` or `GameOver`.
    pub phase: Phase,
    /// Events appended while resolving this command, in order.
    pub events: Vec<GameEvent>,
    /// What each enemy did, in id order.
    pub enemy_actions: Vec<(EntityId, EnemyAction)>,
}

impl TurnReport {
    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }
}

/// Drives one session's state through the turn state machine.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Resolves `command` as one full turn.
    ///
    /// Fails without touching the state when the game is already over.
    pub fn execute(
        &mut self,
        command: Command,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Result<TurnReport, TurnError> {
        match self.state.phase() {
            Phase::AwaitingCommand => {}
            Phase::GameOver => {
                return Err(TurnError::GameOver {
                    turn: self.state.turn_number(),
                });
            }
            phase => return Err(TurnError::UnexpectedPhase(phase)),
        }

        let mark = self.state.log.len();
        self.state.turn.phase = Phase::ResolvingPlayerAction;

        let acted = match command {
            Command::Move(direction) => {
                action::move_player(self.state, direction, self.config, rng).acted()
            }
            Command::Attack => {
                action::attack_player(self.state, self.config, rng);
                true
            }
        };

        let enemy_actions = if acted {
            let actions = turns::enemy_phase(self.state, &self.config.combat.enemy, rng);
            turns::end_of_turn(self.state);
            actions
        } else {
            self.state.turn.phase = Phase::AwaitingCommand;
            Vec::new()
        };

        Ok(TurnReport {
            acted,
            turn_number: self.state.turn_number(),
            phase: self.state.phase(),
            events: self.state.log.since(mark).to_vec(),
            enemy_actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::env::ScriptedRng;
    use crate::map::Grid;
    use crate::state::{EnemyKind, EventCategory, PlayerState, Position};

    fn state() -> GameState {
        let grid = Grid::from_ascii(&["######", "#....#", "#....#", "######"]);
        GameState::new(grid, PlayerState::new(Position::new(1, 1), 20))
    }

    #[test]
    fn no_op_move_skips_enemy_phase() {
        let mut state = state();
        state.add_enemy(Position::new(4, 2), 8, EnemyKind::Basic).unwrap();
        let before = state.entities.clone();
        let config = GameConfig::default();
        let mut rng = ScriptedRng::constant(0.0);

        let report = GameEngine::new(&mut state, &config)
            .execute(Command::Move(Direction::Left), &mut rng)
            .unwrap();
        assert!(!report.acted);
        assert_eq!(report.turn_number, 1);
        assert_eq!(report.phase, Phase::AwaitingCommand);
        assert!(report.enemy_actions.is_empty());
        assert_eq!(state.entities, before);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn acted_turn_runs_enemies_and_advances() {
        let mut state = state();
        let id = state.add_enemy(Position::new(4, 2), 8, EnemyKind::Basic).unwrap();
        let config = GameConfig::default();

        let report = GameEngine::new(&mut state, &config)
            .execute(Command::Move(Direction::Right), &mut ScriptedRng::constant(0.0))
            .unwrap();
        assert!(report.acted);
        assert_eq!(report.turn_number, 2);
        assert_eq!(report.enemy_actions.len(), 1);
        assert_eq!(report.enemy_actions[0].0, id);
        assert_eq!(report.events[0].category, EventCategory::Move);
    }

    #[test]
    fn game_over_refuses_commands_without_changes() {
        let mut state = state();
        state.turn.phase = Phase::GameOver;
        let snapshot = state.clone();
        let config = GameConfig::default();

        let err = GameEngine::new(&mut state, &config)
            .execute(Command::Attack, &mut ScriptedRng::constant(0.5))
            .unwrap_err();
        assert_eq!(err, TurnError::GameOver { turn: 1 });
        assert_eq!(state, snapshot);
    }

    #[test]
    fn lethal_enemy_phase_ends_the_game() {
        let mut state = state();
        state.entities.player.hp = 1;
        state.add_enemy(Position::new(2, 1), 8, EnemyKind::Basic).unwrap();
        let config = GameConfig::default();
        // player: miss (1 draw); enemy: hit for 1+ (3 draws)
        let mut rng = ScriptedRng::new(vec![0.0, 0.5, 0.5, 0.9]);

        let report = GameEngine::new(&mut state, &config)
            .execute(Command::Attack, &mut rng)
            .unwrap();
        assert!(report.is_game_over());
        assert_eq!(report.turn_number, 1);
        assert_eq!(state.player().hp, 0);
        assert_eq!(
            report.events.last().map(|event| event.category),
            Some(EventCategory::Defeat)
        );
    }
}
