//! Greedy single-step chase with a random fallback.

use crate::env::RngSource;
use crate::state::{EntityId, GameState, Position};

/// The 3×3 neighbourhood without "stay", in row-major order.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Cell one step from `from` toward `target`, moving on both axes at once.
pub fn preferred_step(from: Position, target: Position) -> Position {
    from.offset((target.x - from.x).signum(), (target.y - from.y).signum())
}

/// Attempts one chase step for enemy `id` and returns the new position.
///
/// The preferred cell is tried first without consuming randomness. If it is
/// blocked (wall, another enemy, or the player), one neighbour is drawn
/// uniformly from [`NEIGHBOUR_OFFSETS`]; if that one is blocked too the enemy
/// stays put and `None` is returned.
pub fn chase_step(
    state: &mut GameState,
    id: EntityId,
    rng: &mut (impl RngSource + ?Sized),
) -> Option<Position> {
    let origin = state.entities.enemy(id)?.position;
    let player = state.entities.player.position;

    let preferred = preferred_step(origin, player);
    let destination = if state.is_free_for_enemy(preferred) {
        preferred
    } else {
        let (dx, dy) = NEIGHBOUR_OFFSETS[rng.below(NEIGHBOUR_OFFSETS.len() as u32) as usize];
        let fallback = origin.offset(dx, dy);
        if !state.is_free_for_enemy(fallback) {
            return None;
        }
        fallback
    };

    state.entities.enemy_mut(id)?.position = destination;
    Some(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::map::Grid;
    use crate::state::{EnemyKind, PlayerState};

    fn corridor_state(player: Position, enemy: Position) -> (GameState, EntityId) {
        let grid = Grid::from_ascii(&["#######", "#.....#", "#.....#", "#######"]);
        let mut state = GameState::new(grid, PlayerState::new(player, 20));
        let id = state.add_enemy(enemy, 8, EnemyKind::Basic).unwrap();
        (state, id)
    }

    #[test]
    fn preferred_step_moves_diagonally() {
        assert_eq!(
            preferred_step(Position::new(1, 1), Position::new(4, 3)),
            Position::new(2, 2)
        );
        assert_eq!(
            preferred_step(Position::new(4, 1), Position::new(1, 1)),
            Position::new(3, 1)
        );
    }

    #[test]
    fn free_preferred_cell_uses_no_randomness() {
        let (mut state, id) = corridor_state(Position::new(1, 1), Position::new(4, 1));
        let mut rng = ScriptedRng::constant(0.0);
        assert_eq!(chase_step(&mut state, id, &mut rng), Some(Position::new(3, 1)));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn blocked_preferred_cell_falls_back_to_random_neighbour() {
        // Player diagonal to the enemy: the preferred cell is the player's own cell.
        let (mut state, id) = corridor_state(Position::new(2, 1), Position::new(3, 2));
        // index 4 => (1, 0)
        let mut rng = ScriptedRng::constant(0.5);
        assert_eq!(chase_step(&mut state, id, &mut rng), Some(Position::new(4, 2)));
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn blocked_fallback_leaves_enemy_in_place() {
        let (mut state, id) = corridor_state(Position::new(2, 1), Position::new(3, 2));
        // index 7 => (1, 1), a wall
        let mut rng = ScriptedRng::constant(ScriptedRng::MAX);
        assert_eq!(chase_step(&mut state, id, &mut rng), None);
        assert_eq!(state.entities.enemy(id).unwrap().position, Position::new(3, 2));
    }

    #[test]
    fn enemies_do_not_stack() {
        let (mut state, id) = corridor_state(Position::new(1, 1), Position::new(3, 1));
        state
            .add_enemy(Position::new(2, 1), 5, EnemyKind::Basic)
            .unwrap();
        // preferred (2, 1) taken; index 1 => (0, -1) is a wall
        let mut rng = ScriptedRng::constant(0.2);
        assert_eq!(chase_step(&mut state, id, &mut rng), None);
    }
}
