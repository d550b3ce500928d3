use crate::config::GameConfig;
use crate::effect::apply_effect;
use crate::env::RngSource;
use crate::state::{EntityId, EventCategory, GameState, ItemKind, Position};

use super::attack::strike;

/// One of the four grid directions a move command may take.
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
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Offset `(dx, dy)` of one step; `y` grows downwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn step_from(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }
}

/// Result of resolving a move command for the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    /// Cells actually entered.
    pub steps: u32,
    /// Enemy bumped into, which turned the move into an attack.
    pub attacked: Option<EntityId>,
    /// Items collected along the way.
    pub picked_up: Vec<ItemKind>,
}

impl MoveOutcome {
    /// Whether the command consumed the turn.
    pub fn acted(&self) -> bool {
        self.steps > 0 || self.attacked.is_some()
    }
}

/// Walks the player up to `steps_per_move` cells in `direction`.
///
/// Each step inspects the destination: an enemy there is attacked and ends
/// the move, a floor cell is entered (collecting any item on it), anything
/// else stops the move. A command that neither moves nor attacks records a
/// [`EventCategory::Blocked`] event and leaves everything else untouched.
pub fn move_player(
    state: &mut GameState,
    direction: Direction,
    config: &GameConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    for _ in 0..state.entities.player.steps_per_move() {
        let destination = direction.step_from(state.entities.player.position);

        if let Some(target) = state.entities.enemy_at(destination).map(|enemy| enemy.id) {
            strike(state, target, config, rng);
            outcome.attacked = Some(target);
            break;
        }
        if !state.grid.is_walkable(destination) {
            break;
        }

        state.entities.player.position = destination;
        outcome.steps += 1;
        state.record(EventCategory::Move, format!("You move {direction}."));

        if let Some(item) = state.entities.take_item_at(destination) {
            let effect = apply_effect(item.kind, &mut state.entities.player, &config.items);
            state.record(EventCategory::ItemPickup, effect.describe());
            outcome.picked_up.push(item.kind);
        }
    }

    if !outcome.acted() {
        state.record(EventCategory::Blocked, "A wall blocks your way.");
    }
    outcome
}
