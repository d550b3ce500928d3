//! Combatants: the player character and the enemy roster entries.

use super::{EntityId, Position};

/// The single player character.
///
/// Hit points never drop below zero on the player; a player at zero stays in
/// the state so the final board can still be displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    pub hp: i32,
    pub max_hp: i32,
    /// Flat bonus added to both ends of the player's damage range.
    pub attack_bonus: i32,
    /// Upcoming turns during which a move covers two cells.
    pub dash_turns_remaining: u32,
}

impl PlayerState {
    pub fn new(position: Position, max_hp: i32) -> Self {
        Self {
            position,
            hp: max_hp,
            max_hp,
            attack_bonus: 0,
            dash_turns_remaining: 0,
        }
    }

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_dashing(&self) -> bool {
        self.dash_turns_remaining > 0
    }

    /// Movement steps granted by one move command.
    pub fn steps_per_move(&self) -> u32 {
        if self.is_dashing() { 2 } else { 1 }
    }
}

/// Behavior variant of an enemy, fixed at spawn.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum EnemyKind {
    /// One attack when adjacent, one chase step otherwise.
    #[default]
    Basic,
    /// Two independent attacks when adjacent.
    DoubleAttack,
    /// Up to two chase steps when not adjacent.
    Fast,
}

impl EnemyKind {
    /// Attacks resolved per enemy phase when adjacent to the player.
    pub const fn attacks_per_phase(self) -> usize {
        match self {
            EnemyKind::DoubleAttack => 2,
            EnemyKind::Basic | EnemyKind::Fast => 1,
        }
    }

    /// Chase steps attempted per enemy phase when not adjacent.
    pub const fn steps_per_phase(self) -> usize {
        match self {
            EnemyKind::Fast => 2,
            EnemyKind::Basic | EnemyKind::DoubleAttack => 1,
        }
    }

    /// Variant for a spawn draw in `[0, 3)`.
    pub(crate) fn from_draw(draw: u32) -> Self {
        match draw {
            0 => EnemyKind::DoubleAttack,
            1 => EnemyKind::Fast,
            _ => EnemyKind::Basic,
        }
    }

    /// Short name used in event text.
    pub fn label(self) -> &'static str {
        match self {
            EnemyKind::Basic => "enemy",
            EnemyKind::DoubleAttack => "brute",
            EnemyKind::Fast => "stalker",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    pub id: EntityId,
    pub position: Position,
    pub hp: i32,
    pub kind: EnemyKind,
}

impl EnemyState {
    pub fn new(id: EntityId, position: Position, hp: i32, kind: EnemyKind) -> Self {
        Self {
            id,
            position,
            hp,
            kind,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}
