//! Deterministic rules of the turn-based dungeon crawler.
//!
//! `game-core` owns the canonical game model (grid, entities, turn state,
//! event log) and the pure operations that evolve it. It performs no I/O and
//! keeps no global state: every random decision is drawn from an injected
//! [`RngSource`], so a scripted source reproduces a session exactly.
//!
//! Sessions start with [`new_game`]; all later state mutation flows through
//! [`GameEngine::execute`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod effect;
pub mod engine;
pub mod env;
pub mod error;
pub mod map;
pub mod spawn;
pub mod state;

pub use action::{Command, Direction, MoveOutcome, StrikeReport};
pub use ai::EnemyAction;
pub use combat::{AttackOutcome, AttackProfile};
pub use config::{
    CombatConfig, ConfigError, GameConfig, ItemRules, MapConfig, PlayerConfig, SpawnConfig,
};
pub use effect::{ItemEffect, apply_effect};
pub use engine::{GameEngine, TurnError, TurnReport};
pub use env::{PcgRng, RngSource, ScriptedRng};
pub use error::{ErrorSeverity, GameError};
pub use map::{Grid, MapDimensions, MapError, Terrain};
pub use spawn::{SpawnError, new_game};
pub use state::{
    EnemyKind, EnemyState, EntitiesState, EntityId, EventCategory, EventLog, GameEvent,
    GameState, ItemKind, ItemState, Phase, PlayerState, Position, StateError, TurnState,
};
