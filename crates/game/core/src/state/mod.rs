//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the grid, the
//! entities, turn bookkeeping and the event log. Front ends clone or query
//! this state but mutate it exclusively through the engine.
mod error;
mod log;
pub mod types;

pub use error::StateError;
pub use log::{EventCategory, EventLog, GameEvent};
pub use types::{
    EnemyKind, EnemyState, EntitiesState, EntityId, ItemKind, ItemState, Phase, PlayerState,
    Position, TurnState,
};

use crate::map::Grid;

/// Canonical snapshot of the deterministic game state.
///
/// A renderer can redraw everything from this value alone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Static layout, immutable after creation.
    pub grid: Grid,
    pub entities: EntitiesState,
    pub turn: TurnState,
    /// Text of the most recent event.
    pub last_message: String,
    pub log: EventLog,

    /// Sequential enemy id allocator (monotonically increasing, never reused).
    next_enemy_id: EntityId,
}

impl GameState {
    /// Creates a state with the player and no enemies or items.
    ///
    /// The player's cell is not validated here; [`crate::spawn`] only ever
    /// passes free floor cells.
    pub fn new(grid: Grid, player: PlayerState) -> Self {
        Self {
            grid,
            entities: EntitiesState::new(player),
            turn: TurnState::new(),
            last_message: String::new(),
            log: EventLog::new(),
            next_enemy_id: EntityId::FIRST,
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.entities.player
    }

    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number
    }

    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.turn.phase.is_terminal()
    }

    /// Allocates a new unique enemy id.
    fn allocate_enemy_id(&mut self) -> EntityId {
        let id = self.next_enemy_id;
        self.next_enemy_id = id.next();
        id
    }

    /// Checks that `position` is an unoccupied floor cell.
    pub fn check_free_floor(&self, position: Position) -> Result<(), StateError> {
        match self.grid.terrain(position) {
            None => Err(StateError::OutOfBounds(position)),
            Some(terrain) if !terrain.is_walkable() => Err(StateError::NotFloor(position)),
            Some(_) if self.entities.is_occupied(position) => Err(StateError::Occupied(position)),
            Some(_) => Ok(()),
        }
    }

    /// Adds an enemy on a free floor cell and returns its freshly allocated id.
    pub fn add_enemy(
        &mut self,
        position: Position,
        hp: i32,
        kind: EnemyKind,
    ) -> Result<EntityId, StateError> {
        self.check_free_floor(position)?;
        let id = self.allocate_enemy_id();
        self.entities
            .insert_enemy(EnemyState::new(id, position, hp, kind));
        Ok(id)
    }

    /// Drops an item on a free floor cell.
    pub fn add_item(&mut self, position: Position, kind: ItemKind) -> Result<(), StateError> {
        self.check_free_floor(position)?;
        self.entities.insert_item(ItemState::new(position, kind));
        Ok(())
    }

    /// A cell an enemy may step onto: floor, not the player, no other enemy.
    ///
    /// Items do not block enemies; they simply stay where they are.
    pub fn is_free_for_enemy(&self, position: Position) -> bool {
        self.grid.is_walkable(position)
            && self.entities.player.position != position
            && self.entities.enemy_at(position).is_none()
    }

    /// Appends an event stamped with the current turn number.
    pub fn record(&mut self, category: EventCategory, message: impl Into<String>) {
        let event = GameEvent::new(self.turn.turn_number, category, message);
        self.last_message.clone_from(&event.message);
        self.log.push(event);
    }
}
