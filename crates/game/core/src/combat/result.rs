//! Combat result types and attack resolution.

use super::hit::{roll_critical, roll_miss};
use super::profile::AttackProfile;
use crate::env::RngSource;

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit for the given damage.
    Hit(u32),
    /// Critical hit; the damage is already doubled.
    Critical(u32),
}

impl AttackOutcome {
    pub fn damage(self) -> u32 {
        match self {
            AttackOutcome::Miss => 0,
            AttackOutcome::Hit(damage) | AttackOutcome::Critical(damage) => damage,
        }
    }

    pub fn is_miss(self) -> bool {
        matches!(self, AttackOutcome::Miss)
    }
}

/// Resolve one attack.
///
/// Draw order is fixed:
///
/// 1. miss roll: `next < miss_rate` ⇒ [`AttackOutcome::Miss`], no further draws
/// 2. damage: uniform integer in `[min + bonus, max + bonus]`
/// 3. critical roll: `next < crit_rate` ⇒ damage doubled
pub fn resolve_attack(
    profile: &AttackProfile,
    rng: &mut (impl RngSource + ?Sized),
) -> AttackOutcome {
    if roll_miss(profile.miss_rate, rng) {
        return AttackOutcome::Miss;
    }

    let (min, max) = profile.damage_range();
    let damage = rng.range_inclusive(min, max).max(0) as u32;

    if roll_critical(profile.crit_rate, rng) {
        AttackOutcome::Critical(damage * 2)
    } else {
        AttackOutcome::Hit(damage)
    }
}
