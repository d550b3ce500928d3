//! Probability checks for a single attack.

use crate::env::RngSource;

/// Consumes one draw; `true` if the attack misses.
pub fn roll_miss(miss_rate: f64, rng: &mut (impl RngSource + ?Sized)) -> bool {
    rng.chance(miss_rate)
}

/// Consumes one draw; `true` if the landed attack is a critical hit.
pub fn roll_critical(crit_rate: f64, rng: &mut (impl RngSource + ?Sized)) -> bool {
    rng.chance(crit_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn roll_below_rate_succeeds() {
        let mut rng = ScriptedRng::new(vec![0.05, 0.5]);
        assert!(roll_miss(0.1, &mut rng));
        assert!(!roll_miss(0.1, &mut rng));
    }

    #[test]
    fn zero_rate_never_fires() {
        let mut rng = ScriptedRng::constant(0.0);
        assert!(!roll_critical(0.0, &mut rng));
    }
}
