//! Session setup: carve the map and populate it.
//!
//! Every placement draws uniformly random cells (x first, then y) and rejects
//! walls and cells already taken by the player, an enemy or an item. Draws
//! are capped by [`SpawnConfig::max_placement_attempts`] so a map that is too
//! crowded fails with a configuration error instead of looping forever.

use crate::config::{ConfigError, GameConfig, SpawnConfig};
use crate::env::RngSource;
use crate::error::{ErrorSeverity, GameError};
use crate::map::{self, Grid, MapError};
use crate::state::{
    EnemyKind, EntityId, EventCategory, GameState, ItemKind, PlayerState, Position,
};

/// Session creation failures. No [`GameState`] is produced when one occurs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("map has {floors} floor cells but {needed} spawns were requested")]
    MapTooSmall { needed: u64, floors: usize },

    #[error("no free floor cell for {what} after {attempts} attempts")]
    NoFreeCell { what: &'static str, attempts: u32 },
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SpawnError::Config(err) => err.severity(),
            SpawnError::Map(err) => err.severity(),
            SpawnError::MapTooSmall { .. } | SpawnError::NoFreeCell { .. } => {
                ErrorSeverity::Configuration
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SpawnError::Config(err) => err.error_code(),
            SpawnError::Map(err) => err.error_code(),
            SpawnError::MapTooSmall { .. } => "SPAWN_MAP_TOO_SMALL",
            SpawnError::NoFreeCell { .. } => "SPAWN_NO_FREE_CELL",
        }
    }
}

/// Builds a fresh session: grid, player, enemies, then heal, power and dash items.
pub fn new_game(
    config: &GameConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> Result<GameState, SpawnError> {
    config.validate()?;

    let grid = map::generate(config.map.dimensions(), config.map.carve_steps(), rng)?;

    let needed = config.spawn.total_spawns();
    let floors = grid.floor_count();
    if needed > floors as u64 {
        return Err(SpawnError::MapTooSmall { needed, floors });
    }

    let player = spawn_player(&grid, config, rng)?;
    let mut state = GameState::new(grid, player);

    spawn_enemies(&mut state, config.spawn.enemy_count, &config.spawn, rng)?;
    spawn_items(&mut state, ItemKind::Heal, config.spawn.heal_items, &config.spawn, rng)?;
    spawn_items(&mut state, ItemKind::Power, config.spawn.power_items, &config.spawn, rng)?;
    spawn_items(&mut state, ItemKind::Dash, config.spawn.dash_items, &config.spawn, rng)?;

    state.record(EventCategory::Info, "The adventure begins!");
    Ok(state)
}

/// Places the player on a random floor cell of an otherwise empty grid.
pub fn spawn_player(
    grid: &Grid,
    config: &GameConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> Result<PlayerState, SpawnError> {
    let position = draw_free_cell(
        grid,
        |_| false,
        config.spawn.max_placement_attempts,
        rng,
    )
    .ok_or(SpawnError::NoFreeCell {
        what: "player",
        attempts: config.spawn.max_placement_attempts,
    })?;
    Ok(PlayerState::new(position, config.player.max_hp))
}

/// Adds `count` enemies. Draw order per enemy: position, hit points, variant.
pub fn spawn_enemies(
    state: &mut GameState,
    count: u32,
    rules: &SpawnConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> Result<Vec<EntityId>, SpawnError> {
    let mut spawned = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let position = draw_free_cell(
            &state.grid,
            |p| state.entities.is_occupied(p),
            rules.max_placement_attempts,
            rng,
        )
        .ok_or(SpawnError::NoFreeCell {
            what: "enemy",
            attempts: rules.max_placement_attempts,
        })?;
        let hp = rng.range_inclusive(rules.enemy_hp_min, rules.enemy_hp_max);
        let kind = EnemyKind::from_draw(rng.below(3));
        let id = state
            .add_enemy(position, hp, kind)
            .map_err(|_| SpawnError::NoFreeCell {
                what: "enemy",
                attempts: rules.max_placement_attempts,
            })?;
        spawned.push(id);
    }
    Ok(spawned)
}

/// Adds `count` items of one kind.
pub fn spawn_items(
    state: &mut GameState,
    kind: ItemKind,
    count: u32,
    rules: &SpawnConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> Result<(), SpawnError> {
    for _ in 0..count {
        let position = draw_free_cell(
            &state.grid,
            |p| state.entities.is_occupied(p),
            rules.max_placement_attempts,
            rng,
        )
        .ok_or(SpawnError::NoFreeCell {
            what: "item",
            attempts: rules.max_placement_attempts,
        })?;
        state
            .add_item(position, kind)
            .map_err(|_| SpawnError::NoFreeCell {
                what: "item",
                attempts: rules.max_placement_attempts,
            })?;
    }
    Ok(())
}

/// Draws random cells until one is floor and not taken, or attempts run out.
fn draw_free_cell(
    grid: &Grid,
    is_taken: impl Fn(Position) -> bool,
    max_attempts: u32,
    rng: &mut (impl RngSource + ?Sized),
) -> Option<Position> {
    let dimensions = grid.dimensions();
    (0..max_attempts).find_map(|_| {
        let candidate = Position::new(
            rng.below(dimensions.width) as i32,
            rng.below(dimensions.height) as i32,
        );
        (grid.is_walkable(candidate) && !is_taken(candidate)).then_some(candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};
    use std::collections::HashSet;

    #[test]
    fn default_session_places_everything_on_distinct_floor_cells() {
        for seed in 0..32 {
            let config = GameConfig::default();
            let state = new_game(&config, &mut PcgRng::new(seed)).unwrap();

            let mut cells = HashSet::new();
            assert!(cells.insert(state.player().position));
            for enemy in state.entities.enemies() {
                assert!(state.grid.is_walkable(enemy.position));
                assert!(cells.insert(enemy.position), "seed {seed}: enemy overlaps");
                assert!((5..=12).contains(&enemy.hp));
            }
            for item in state.entities.items() {
                assert!(state.grid.is_walkable(item.position));
                assert!(cells.insert(item.position), "seed {seed}: item overlaps");
            }
            assert_eq!(state.entities.enemy_count(), 5);
            assert_eq!(state.entities.item_count(), 3);
            assert_eq!(state.turn_number(), 1);
            assert_eq!(state.player().hp, 20);
        }
    }

    #[test]
    fn enemy_ids_follow_spawn_order() {
        let state = new_game(&GameConfig::default(), &mut PcgRng::new(3)).unwrap();
        let ids: Vec<u32> = state.entities.enemies().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn crowded_map_is_a_configuration_error() {
        let mut config = GameConfig::default();
        config.map.width = 4;
        config.map.height = 4;
        config.spawn.enemy_count = 50;

        let err = new_game(&config, &mut PcgRng::new(1)).unwrap_err();
        assert!(matches!(err, SpawnError::MapTooSmall { needed: 54, .. }));
        assert_eq!(err.severity(), ErrorSeverity::Configuration);
    }

    #[test]
    fn placement_gives_up_after_the_attempt_cap() {
        let grid = Grid::from_ascii(&["###", "#.#", "###"]);
        let mut config = GameConfig::default();
        config.spawn.max_placement_attempts = 5;
        // Every draw lands on (0, 0), a wall.
        let mut rng = ScriptedRng::constant(0.0);

        let err = spawn_player(&grid, &config, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SpawnError::NoFreeCell {
                what: "player",
                attempts: 5
            }
        );
        assert_eq!(rng.draws(), 10);
    }

    #[test]
    fn scripted_enemy_draws_pick_hp_then_variant() {
        let grid = Grid::from_ascii(&["####", "#..#", "####"]);
        let mut state = GameState::new(grid, PlayerState::new(Position::new(1, 1), 20));
        // x=2, y=1, hp draw 0.0 -> 5, variant draw 0.5 -> Fast
        let mut rng = ScriptedRng::new(vec![0.5, 0.5, 0.0, 0.5]);

        let ids = spawn_enemies(&mut state, 1, &SpawnConfig::default(), &mut rng).unwrap();
        let enemy = state.entities.enemy(ids[0]).unwrap();
        assert_eq!(enemy.position, Position::new(2, 1));
        assert_eq!(enemy.hp, 5);
        assert_eq!(enemy.kind, EnemyKind::Fast);
    }

    #[test]
    fn invalid_config_produces_no_state() {
        let mut config = GameConfig::default();
        config.map.width = 0;
        assert!(matches!(
            new_game(&config, &mut PcgRng::new(0)),
            Err(SpawnError::Config(ConfigError::EmptyMap { .. }))
        ));
    }
}
