use crate::combat::{AttackOutcome, apply_damage, resolve_attack};
use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::{EntityId, EventCategory, GameState};

/// What a player attack did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeReport {
    pub target: EntityId,
    pub outcome: AttackOutcome,
    /// The target dropped to hp ≤ 0 and was reaped.
    pub killed: bool,
}

/// Resolves one player attack against enemy `target`.
///
/// The player's profile is the configured base plus the current attack bonus.
/// A kill is reaped immediately so the enemy never acts afterwards.
pub fn strike(
    state: &mut GameState,
    target: EntityId,
    config: &GameConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> Option<StrikeReport> {
    let profile = config
        .combat
        .player
        .with_bonus(state.entities.player.attack_bonus);
    let enemy = state.entities.enemy_mut(target)?;
    let outcome = resolve_attack(&profile, rng);
    enemy.hp = apply_damage(enemy.hp, outcome);
    let name = enemy.kind.label();
    let killed = !enemy.is_alive();

    let (category, message) = match outcome {
        AttackOutcome::Miss => (
            EventCategory::AttackMiss,
            format!("You miss the {name} {target}."),
        ),
        AttackOutcome::Hit(damage) => (
            EventCategory::AttackHit,
            format!("You hit the {name} {target} for {damage}."),
        ),
        AttackOutcome::Critical(damage) => (
            EventCategory::AttackCrit,
            format!("Critical hit! The {name} {target} takes {damage}."),
        ),
    };
    state.record(category, message);

    if killed {
        state.entities.reap();
        state.record(EventCategory::Kill, format!("You defeated the {name} {target}!"));
    }

    Some(StrikeReport {
        target,
        outcome,
        killed,
    })
}

/// Attacks the lowest-id enemy adjacent to the player, or swings at the air.
///
/// Always consumes the turn.
pub fn attack_player(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> Option<StrikeReport> {
    match state.entities.enemy_adjacent_to_player().map(|enemy| enemy.id) {
        Some(target) => strike(state, target, config, rng),
        None => {
            state.record(EventCategory::AttackMiss, "You swing at the air.");
            None
        }
    }
}
