//! Damage application.

use super::AttackOutcome;

/// Subtracts the outcome's damage from `hp` and returns the new value.
///
/// No floor clamp: a result ≤ 0 means defeated, and callers must treat it
/// that way rather than relying on a zero floor.
pub fn apply_damage(hp: i32, outcome: AttackOutcome) -> i32 {
    hp - outcome.damage() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_can_overshoot_zero() {
        assert_eq!(apply_damage(4, AttackOutcome::Hit(6)), -2);
        assert_eq!(apply_damage(4, AttackOutcome::Critical(8)), -4);
        assert_eq!(apply_damage(4, AttackOutcome::Miss), 4);
    }
}
