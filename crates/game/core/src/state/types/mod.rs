pub mod actor;
pub mod common;
pub mod entities;
pub mod item;
pub mod turn;

pub use actor::{EnemyKind, EnemyState, PlayerState};
pub use common::{EntityId, Position};
pub use entities::EntitiesState;
pub use item::{ItemKind, ItemState};
pub use turn::{Phase, TurnState};
