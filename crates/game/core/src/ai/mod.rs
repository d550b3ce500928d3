//! Enemy behavior during the enemy phase.
//!
//! Every variant attacks when adjacent and chases otherwise. How many attacks
//! or steps it gets is read from [`EnemyKind::attacks_per_phase`] and
//! [`EnemyKind::steps_per_phase`]. Adjacency is checked once, against the
//! player's live position, before the enemy acts.
mod chase;

pub use chase::{NEIGHBOUR_OFFSETS, chase_step, preferred_step};

use arrayvec::ArrayVec;

use crate::combat::{AttackOutcome, AttackProfile, apply_damage, resolve_attack};
use crate::env::RngSource;
use crate::state::{EnemyKind, EntityId, EventCategory, GameState, Position};

/// Most attacks or steps any variant takes in one phase.
pub const MAX_ACTIONS_PER_PHASE: usize = 2;

/// What one enemy did during its slot of the enemy phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyAction {
    /// Attacked the adjacent player; one outcome per attack.
    Attacked(ArrayVec<AttackOutcome, MAX_ACTIONS_PER_PHASE>),
    /// Moved; the cells entered, in order.
    Moved(ArrayVec<Position, MAX_ACTIONS_PER_PHASE>),
    /// Found no free cell and stayed put.
    Footsteps,
}

/// Runs the policy of enemy `id` against the current state.
///
/// Returns `None` when the id is unknown or the enemy is already dead; the
/// engine reaps before the phase so this only happens on misuse.
pub fn act(
    state: &mut GameState,
    id: EntityId,
    profile: &AttackProfile,
    rng: &mut (impl RngSource + ?Sized),
) -> Option<EnemyAction> {
    let enemy = state.entities.enemy(id).filter(|enemy| enemy.is_alive())?;
    let kind = enemy.kind;
    let adjacent = enemy.position.is_adjacent(state.entities.player.position);

    let action = if adjacent {
        EnemyAction::Attacked(attack_player(state, id, kind, profile, rng))
    } else {
        pursue(state, id, kind.steps_per_phase(), rng)
    };
    Some(action)
}

fn attack_player(
    state: &mut GameState,
    id: EntityId,
    kind: EnemyKind,
    profile: &AttackProfile,
    rng: &mut (impl RngSource + ?Sized),
) -> ArrayVec<AttackOutcome, MAX_ACTIONS_PER_PHASE> {
    let mut outcomes = ArrayVec::new();
    for _ in 0..kind.attacks_per_phase() {
        let outcome = resolve_attack(profile, rng);
        let player = &mut state.entities.player;
        player.hp = apply_damage(player.hp, outcome).max(0);

        let name = kind.label();
        let message = match outcome {
            AttackOutcome::Miss => format!("The {name} {id} misses you."),
            AttackOutcome::Hit(damage) => format!("The {name} {id} hits you for {damage}."),
            AttackOutcome::Critical(damage) => {
                format!("The {name} {id} lands a critical blow for {damage}!")
            }
        };
        state.record(EventCategory::EnemyAttack, message);
        outcomes.push(outcome);
    }
    outcomes
}

/// Up to `max_steps` chase steps, stopping at the first failed step.
fn pursue(
    state: &mut GameState,
    id: EntityId,
    max_steps: usize,
    rng: &mut (impl RngSource + ?Sized),
) -> EnemyAction {
    let mut path = ArrayVec::<Position, MAX_ACTIONS_PER_PHASE>::new();
    for _ in 0..max_steps.min(MAX_ACTIONS_PER_PHASE) {
        let Some(cell) = chase_step(state, id, rng) else {
            break;
        };
        path.push(cell);
    }

    if path.is_empty() {
        state.record(EventCategory::EnemyFootsteps, "You hear footsteps.");
        EnemyAction::Footsteps
    } else {
        EnemyAction::Moved(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::map::Grid;
    use crate::state::PlayerState;

    fn corridor() -> Grid {
        Grid::from_ascii(&["########", "#......#", "########"])
    }

    fn with_enemy(player: Position, enemy: Position, kind: EnemyKind) -> (GameState, EntityId) {
        let mut state = GameState::new(corridor(), PlayerState::new(player, 20));
        let id = state.add_enemy(enemy, 8, kind).unwrap();
        (state, id)
    }

    fn enemy_profile() -> AttackProfile {
        AttackProfile::new(1, 6).with_rates(0.2, 0.05)
    }

    #[test]
    fn adjacent_basic_attacks_once() {
        let (mut state, id) =
            with_enemy(Position::new(1, 1), Position::new(2, 1), EnemyKind::Basic);
        // miss roll passes, damage 0.5 -> 4, no crit
        let mut rng = ScriptedRng::new(vec![0.5, 0.5, 0.9]);

        let action = act(&mut state, id, &enemy_profile(), &mut rng).unwrap();
        let EnemyAction::Attacked(outcomes) = action else {
            panic!("expected an attack, got {action:?}");
        };
        assert_eq!(outcomes.as_slice(), &[AttackOutcome::Hit(4)]);
        assert_eq!(state.player().hp, 16);
        assert_eq!(state.log.count(EventCategory::EnemyAttack), 1);
    }

    #[test]
    fn double_attack_resolves_two_independent_attacks() {
        let (mut state, id) =
            with_enemy(Position::new(1, 1), Position::new(2, 1), EnemyKind::DoubleAttack);
        // first attack misses (1 draw), second hits for 1 (3 draws)
        let mut rng = ScriptedRng::new(vec![0.1, 0.5, 0.0, 0.9]);

        let action = act(&mut state, id, &enemy_profile(), &mut rng).unwrap();
        assert_eq!(
            action,
            EnemyAction::Attacked([AttackOutcome::Miss, AttackOutcome::Hit(1)].into())
        );
        assert_eq!(state.player().hp, 19);
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn player_hp_floors_at_zero() {
        let (mut state, id) =
            with_enemy(Position::new(1, 1), Position::new(2, 1), EnemyKind::Basic);
        state.entities.player.hp = 2;
        let mut rng = ScriptedRng::new(vec![0.5, ScriptedRng::MAX, 0.0]);

        act(&mut state, id, &enemy_profile(), &mut rng).unwrap();
        assert_eq!(state.player().hp, 0);
    }

    #[test]
    fn basic_takes_one_step() {
        let (mut state, id) =
            with_enemy(Position::new(1, 1), Position::new(5, 1), EnemyKind::Basic);
        let action =
            act(&mut state, id, &enemy_profile(), &mut ScriptedRng::constant(0.0)).unwrap();
        assert_eq!(action, EnemyAction::Moved([Position::new(4, 1)].into_iter().collect()));
    }

    #[test]
    fn fast_closes_two_tiles() {
        let (mut state, id) = with_enemy(Position::new(1, 1), Position::new(5, 1), EnemyKind::Fast);
        let action =
            act(&mut state, id, &enemy_profile(), &mut ScriptedRng::constant(0.0)).unwrap();
        assert_eq!(
            action,
            EnemyAction::Moved([Position::new(4, 1), Position::new(3, 1)].into())
        );
    }

    #[test]
    fn fast_second_step_falls_back_when_player_blocks() {
        let (mut state, id) = with_enemy(Position::new(1, 1), Position::new(3, 1), EnemyKind::Fast);
        // second preferred cell is the player's; fallback (-1, -1) hits the wall
        let mut rng = ScriptedRng::constant(0.0);

        let action = act(&mut state, id, &enemy_profile(), &mut rng).unwrap();
        assert_eq!(action, EnemyAction::Moved([Position::new(2, 1)].into_iter().collect()));
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn fast_second_step_can_wander_off_after_reaching_the_player() {
        let grid = Grid::from_ascii(&["#####", "#...#", "#...#", "#####"]);
        let mut state = GameState::new(grid, PlayerState::new(Position::new(1, 1), 20));
        let id = state.add_enemy(Position::new(3, 1), 8, EnemyKind::Fast).unwrap();
        // 0.9 -> offset index 7, (1, 1): from (2, 1) to (3, 2)
        let mut rng = ScriptedRng::constant(0.9);

        let action = act(&mut state, id, &enemy_profile(), &mut rng).unwrap();
        assert_eq!(
            action,
            EnemyAction::Moved([Position::new(2, 1), Position::new(3, 2)].into())
        );
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn boxed_in_enemy_hears_footsteps() {
        let grid = Grid::from_ascii(&["#####", "#.#.#", "#####"]);
        let mut state = GameState::new(grid, PlayerState::new(Position::new(1, 1), 20));
        let id = state.add_enemy(Position::new(3, 1), 8, EnemyKind::Basic).unwrap();

        let action =
            act(&mut state, id, &enemy_profile(), &mut ScriptedRng::constant(0.0)).unwrap();
        assert_eq!(action, EnemyAction::Footsteps);
        assert_eq!(state.entities.enemy(id).unwrap().position, Position::new(3, 1));
        assert_eq!(state.log.count(EventCategory::EnemyFootsteps), 1);
    }

    #[test]
    fn dead_enemy_does_not_act() {
        let (mut state, id) =
            with_enemy(Position::new(1, 1), Position::new(2, 1), EnemyKind::Basic);
        state.entities.enemy_mut(id).unwrap().hp = 0;
        assert_eq!(act(&mut state, id, &enemy_profile(), &mut ScriptedRng::constant(0.5)), None);
        assert_eq!(state.player().hp, 20);
    }
}
