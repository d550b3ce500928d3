//! Game configuration constants and tunable parameters.
//!
//! Numeric balance values live here rather than in the rules. Every section
//! has a `Default` tuned for a 20×20 dungeon, and with the `serde` feature
//! every field is optional in data files.

use crate::combat::AttackProfile;
use crate::error::{ErrorSeverity, GameError};
use crate::map::MapDimensions;

/// Top-level configuration for a session.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub map: MapConfig,
    pub spawn: SpawnConfig,
    pub player: PlayerConfig,
    pub combat: CombatConfig,
    pub items: ItemRules,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks internal consistency of every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.width == 0 || self.map.height == 0 {
            return Err(ConfigError::EmptyMap {
                width: self.map.width,
                height: self.map.height,
            });
        }
        if self.spawn.enemy_hp_min <= 0 || self.spawn.enemy_hp_min > self.spawn.enemy_hp_max {
            return Err(ConfigError::InvalidEnemyHp {
                min: self.spawn.enemy_hp_min,
                max: self.spawn.enemy_hp_max,
            });
        }
        if self.spawn.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        if self.player.max_hp <= 0 {
            return Err(ConfigError::InvalidPlayerHp(self.player.max_hp));
        }
        self.items.validate()?;
        self.combat
            .player
            .validate()
            .map_err(|reason| ConfigError::InvalidAttackProfile {
                side: "player",
                reason,
            })?;
        self.combat
            .enemy
            .validate()
            .map_err(|reason| ConfigError::InvalidAttackProfile {
                side: "enemy",
                reason,
            })?;
        Ok(())
    }
}

/// Map generation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    pub width: u32,
    pub height: u32,
    /// Carve steps per cell. 3 gives a sparse, tactical layout; 4 a more open one.
    pub carve_factor: u32,
}

impl MapConfig {
    pub const DEFAULT_WIDTH: u32 = 20;
    pub const DEFAULT_HEIGHT: u32 = 20;
    pub const DEFAULT_CARVE_FACTOR: u32 = 3;

    pub fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }

    pub fn carve_steps(&self) -> u32 {
        self.width
            .saturating_mul(self.height)
            .saturating_mul(self.carve_factor)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            carve_factor: Self::DEFAULT_CARVE_FACTOR,
        }
    }
}

/// Population of a fresh session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnConfig {
    pub enemy_count: u32,
    pub heal_items: u32,
    pub power_items: u32,
    pub dash_items: u32,
    pub enemy_hp_min: i32,
    pub enemy_hp_max: i32,
    /// Random cell draws allowed per placement before giving up.
    pub max_placement_attempts: u32,
}

impl SpawnConfig {
    /// Total number of cells the spawner needs, player included.
    pub fn total_spawns(&self) -> u64 {
        1 + u64::from(self.enemy_count)
            + u64::from(self.heal_items)
            + u64::from(self.power_items)
            + u64::from(self.dash_items)
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            enemy_count: 5,
            heal_items: 1,
            power_items: 1,
            dash_items: 1,
            enemy_hp_min: 5,
            enemy_hp_max: 12,
            max_placement_attempts: 1000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    pub max_hp: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { max_hp: 20 }
    }
}

/// Attack profiles for both sides of a fight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub player: AttackProfile,
    pub enemy: AttackProfile,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            player: AttackProfile::new(3, 6).with_rates(0.10, 0.10),
            enemy: AttackProfile::new(1, 6).with_rates(0.20, 0.05),
        }
    }
}

/// Item effect magnitudes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemRules {
    pub heal_amount: i32,
    pub power_bonus: i32,
    pub dash_turns: u32,
}

impl ItemRules {
    /// Pickups may only raise hp and attack bonus.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("heal_amount", self.heal_amount),
            ("power_bonus", self.power_bonus),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeItemAmount { field, value });
            }
        }
        Ok(())
    }
}

impl Default for ItemRules {
    fn default() -> Self {
        Self {
            heal_amount: 10,
            power_bonus: 3,
            dash_turns: 5,
        }
    }
}

/// Configuration rejected before a session could be created.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("map dimensions {width}x{height} contain no cells")]
    EmptyMap { width: u32, height: u32 },

    #[error("enemy hit point range {min}..={max} is invalid")]
    InvalidEnemyHp { min: i32, max: i32 },

    #[error("player max hp must be positive (got {0})")]
    InvalidPlayerHp(i32),

    #[error("max_placement_attempts must be at least 1")]
    ZeroPlacementAttempts,

    #[error("item rule {field} must not be negative (got {value})")]
    NegativeItemAmount { field: &'static str, value: i32 },

    #[error("{side} attack profile is invalid: {reason}")]
    InvalidAttackProfile {
        side: &'static str,
        reason: &'static str,
    },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Configuration
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMap { .. } => "CONFIG_EMPTY_MAP",
            Self::InvalidEnemyHp { .. } => "CONFIG_INVALID_ENEMY_HP",
            Self::InvalidPlayerHp(_) => "CONFIG_INVALID_PLAYER_HP",
            Self::ZeroPlacementAttempts => "CONFIG_ZERO_PLACEMENT_ATTEMPTS",
            Self::NegativeItemAmount { .. } => "CONFIG_NEGATIVE_ITEM_AMOUNT",
            Self::InvalidAttackProfile { .. } => "CONFIG_INVALID_ATTACK_PROFILE",
        }
    }
}
