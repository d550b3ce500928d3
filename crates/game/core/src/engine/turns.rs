//! Enemy phase and end-of-turn bookkeeping.

use crate::ai::{self, EnemyAction};
use crate::combat::AttackProfile;
use crate::env::RngSource;
use crate::state::{EntityId, EventCategory, GameState, Phase};

/// Lets every living enemy act once, in ascending id order.
///
/// Dead enemies are reaped first, so none of them ever acts.
pub(crate) fn enemy_phase(
    state: &mut GameState,
    profile: &AttackProfile,
    rng: &mut (impl RngSource + ?Sized),
) -> Vec<(EntityId, EnemyAction)> {
    state.turn.phase = Phase::ResolvingEnemyPhase;
    state.entities.reap();

    state
        .entities
        .enemy_ids()
        .into_iter()
        .filter_map(|id| ai::act(state, id, profile, rng).map(|action| (id, action)))
        .collect()
}

/// Closes the turn: counts down dash, then either ends the game or advances
/// the turn number.
pub(crate) fn end_of_turn(state: &mut GameState) {
    state.turn.phase = Phase::EndOfTurn;

    let player = &mut state.entities.player;
    player.dash_turns_remaining = player.dash_turns_remaining.saturating_sub(1);

    if state.entities.player.is_alive() {
        state.turn.turn_number += 1;
        state.turn.phase = Phase::AwaitingCommand;
    } else {
        state.record(EventCategory::Defeat, "You have been defeated. Game over.");
        state.turn.phase = Phase::GameOver;
    }
}
